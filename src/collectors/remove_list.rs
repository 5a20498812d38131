//! Remove-list lookup from the switch configuration
//!
//! Administrators configure substrings to strip from descriptions and
//! neighbor names with
//!
//! ```text
//! event manager environment RMLIST "connected-to-, .mydom.dom, yyy-"
//! ```

use log::{debug, warn};

use crate::collectors::gateway::CommandGateway;
use crate::collectors::sources::REMOVE_LIST_QUERY;

const ENVIRONMENT_KEYWORD: &str = "event manager environment";
const REMOVE_LIST_NAME: &str = "RMLIST";

/// Ordered substrings removed from display names, possibly empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveList {
    entries: Vec<String>,
}

impl RemoveList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Extracts the `RMLIST` variable from configuration text
    ///
    /// Later definitions replace earlier ones. Entries are comma separated,
    /// trimmed, and empty entries are dropped.
    pub fn parse(config: &str) -> Self {
        let mut value = None;
        for line in config.lines() {
            if let Some((name, raw)) = parse_environment_line(line) {
                if name == REMOVE_LIST_NAME {
                    value = Some(raw);
                }
            }
        }

        let entries = value
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Self { entries }
    }

    /// Queries the running config; a failed query yields an empty list
    pub fn fetch<G: CommandGateway + ?Sized>(gateway: &mut G) -> Self {
        match gateway.execute(REMOVE_LIST_QUERY) {
            Ok(config) => {
                let list = Self::parse(&config);
                debug!("Remove-list: {:?}", list.entries);
                list
            }
            Err(err) => {
                warn!("Could not read remove-list, names are shown unshortened: {err}");
                Self::default()
            }
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Splits `event manager environment NAME "VALUE"` into name and value
fn parse_environment_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim().strip_prefix(ENVIRONMENT_KEYWORD)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start();
    let (name, rest) = rest.split_once(char::is_whitespace)?;
    let quoted = rest.trim_start().strip_prefix('"')?;
    let (value, _) = quoted.split_once('"')?;
    if value.is_empty() {
        return None;
    }
    Some((name, value))
}
