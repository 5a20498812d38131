use clap::Parser;

use crate::cli::rate_command::RateOptions;
use crate::cli::table::Columns;

/// Command line of the `ifrate` tool
/// Uses clap's derive macros; short flags combine freely (`-du`, `-nrl`)
#[derive(Debug, Parser)]
#[command(name = "ifrate")]
#[command(version)] // Automatically uses version from Cargo.toml
#[command(about = "Interface throughput and packet rate table for NX-OS switches")]
#[command(long_about = "Prints per-interface Rx/Tx throughput, link utilization and packet rates \
in a fixed-width table. Port-channels are listed with their member interfaces nested below, \
followed by all other interfaces and an IO summary over the physical ports.\n\n\
Descriptions and neighbor names can be shortened on the switch with:\n  \
event manager environment RMLIST \"connected-to-, .mydom.dom\"\n\n\
Examples:\n  \
ifrate                                # All interfaces, default columns\n  \
ifrate -du                            # Described interfaces that are up\n  \
ifrate -n -r                          # Add CDP/LLDP neighbors and discards")]
pub struct Cli {
    /// Only list interfaces that carry a description
    #[arg(short = 'd', long = "description", help = "List ports with description")]
    pub description_only: bool,

    /// Only list interfaces whose state is up
    #[arg(short = 'u', long = "up", help = "List ports in up state")]
    pub up_only: bool,

    /// Add InDisc/OutDisc columns
    #[arg(short = 'r', long = "discards", help = "Show input/output discards per interface")]
    pub discards: bool,

    /// Add the neighbor column, CDP first and LLDP when CDP has no entry
    #[arg(
        short = 'n',
        long = "neighbor",
        help = "Show the CDP or LLDP neighbor attached to an interface"
    )]
    pub neighbor: bool,

    /// Add the rx/tx load interval column
    #[arg(
        short = 'l',
        long = "load",
        help = "Show load interval used for rate calculation (default 30 sec)"
    )]
    pub load_interval: bool,
}

impl Cli {
    pub fn options(&self) -> RateOptions {
        RateOptions {
            description_only: self.description_only,
            up_only: self.up_only,
            columns: Columns {
                neighbor: self.neighbor,
                interval: self.load_interval,
                discards: self.discards,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_no_flags_shows_everything_with_default_columns() {
        let cli = Cli::try_parse_from(["ifrate"]).expect("valid invocation");
        let options = cli.options();
        assert!(!options.description_only);
        assert!(!options.up_only);
        assert_eq!(options.columns, Columns::default());
    }

    #[test]
    fn test_combined_short_flags() {
        let cli = Cli::try_parse_from(["ifrate", "-du"]).expect("valid invocation");
        assert!(cli.description_only);
        assert!(cli.up_only);
        assert!(!cli.neighbor);

        let cli = Cli::try_parse_from(["ifrate", "-nrl", "-d"]).expect("valid invocation");
        let options = cli.options();
        assert!(options.description_only);
        assert_eq!(
            options.columns,
            Columns {
                neighbor: true,
                interval: true,
                discards: true,
            }
        );
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from(["ifrate", "--up", "--neighbor"]).expect("valid invocation");
        assert!(cli.up_only);
        assert!(cli.neighbor);
    }

    #[test]
    fn test_positional_arguments_are_rejected() {
        let err = Cli::try_parse_from(["ifrate", "Ethernet1/1"]).expect_err("usage error");
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = Cli::try_parse_from(["ifrate", "-x"]).expect_err("usage error");
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
