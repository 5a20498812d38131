//! Command gateway to the switch CLI
//!
//! On NX-OS the `vsh -c "<command>"` shell runs a CLI command from the guest
//! shell or bash and prints its output. The reply is consumed whole before the
//! next command is issued.

use std::process::Command;

use log::{debug, trace};

use crate::collectors::errors::{GatewayError, QueryError};
use crate::collectors::parser::{Row, parse_rows};
use crate::collectors::sources::DataSource;

/// Issues one CLI command and returns its raw output
pub trait CommandGateway {
    fn execute(&mut self, command: &str) -> Result<String, GatewayError>;
}

/// Runs commands through an external shell program such as `vsh -c`
#[derive(Debug, Clone)]
pub struct ShellGateway {
    program: String,
    args: Vec<String>,
}

impl ShellGateway {
    /// The command text is appended as the last argument after `args`
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl CommandGateway for ShellGateway {
    fn execute(&mut self, command: &str) -> Result<String, GatewayError> {
        debug!("Running `{} {} {command}`", self.program, self.args.join(" "));

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(command)
            .output()
            .map_err(|io| GatewayError::Spawn {
                program: self.program.clone(),
                io,
            })?;

        if !output.status.success() {
            return Err(GatewayError::CommandFailed {
                command: command.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = match String::from_utf8(output.stdout) {
            Ok(stdout) => stdout,
            Err(err) => {
                debug!("`{command}` output is not UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        trace!("`{command}` returned {} bytes", stdout.len());
        Ok(stdout)
    }
}

/// Executes the query of `source` and parses its reply into rows
///
/// The raw output is dropped once the rows are built.
pub fn query_rows<G: CommandGateway + ?Sized>(
    gateway: &mut G,
    source: DataSource,
) -> Result<Vec<Row>, QueryError> {
    let raw = gateway.execute(&source.command())?;
    let rows = parse_rows(source, &raw)?;
    debug!("{source}: {} rows", rows.len());
    Ok(rows)
}
