//! The NX-OS data sources queried for one rate table
//!
//! Every source is a `show ... | xml` command whose reply carries its own XML
//! namespace and a characteristic `ROW_*` element per record.

use std::fmt;

/// Removes the NETCONF end-of-message marker NX-OS appends to XML output
const XML_FILTER: &str = r#" | xml | exclude "]]>]]>""#;

/// Query for the `event manager environment` lines that hold the remove-list
pub const REMOVE_LIST_QUERY: &str = r#"show running-config | include "event manager environment""#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// `show interface`, one `ROW_interface` per interface
    Interfaces,
    /// `show port-channel summary`, one `ROW_channel` per channel with nested `ROW_member`
    PortChannels,
    /// `show cdp neighbors`, one `ROW_cdp_neighbor_brief_info` per neighbor
    Cdp,
    /// `show lldp neighbors`, one `ROW_nbor` per neighbor
    Lldp,
}

impl DataSource {
    /// The CLI command issued to the gateway
    pub fn command(self) -> String {
        let base = match self {
            DataSource::Interfaces => "show interface",
            DataSource::PortChannels => "show port-channel sum",
            DataSource::Cdp => "show cdp neighbor",
            DataSource::Lldp => "show lldp neighbor",
        };
        format!("{base}{XML_FILTER}")
    }

    /// XML namespace the reply's rows are bound to
    pub fn namespace(self) -> &'static str {
        match self {
            DataSource::Interfaces => "http://www.cisco.com/nxos:1.0:if_manager",
            DataSource::PortChannels => "http://www.cisco.com/nxos:1.0:eth_pcm_dc3",
            DataSource::Cdp => "http://www.cisco.com/nxos:1.0:cdpd",
            DataSource::Lldp => "http://www.cisco.com/nxos:1.0:lldp",
        }
    }

    /// Element name of one top-level record
    pub fn row_type(self) -> &'static str {
        match self {
            DataSource::Interfaces => "ROW_interface",
            DataSource::PortChannels => "ROW_channel",
            DataSource::Cdp => "ROW_cdp_neighbor_brief_info",
            DataSource::Lldp => "ROW_nbor",
        }
    }

    /// Whether the run cannot continue without this source
    pub fn is_mandatory(self) -> bool {
        matches!(self, DataSource::Interfaces | DataSource::PortChannels)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataSource::Interfaces => "interface statistics",
            DataSource::PortChannels => "port-channel summary",
            DataSource::Cdp => "CDP neighbors",
            DataSource::Lldp => "LLDP neighbors",
        };
        f.write_str(name)
    }
}
