//! Interface and port-channel records extracted from switch output

use std::fmt;

/// Operational state of an interface as reported by `show interface`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceState {
    Up,
    Down,
    /// Any other state string NX-OS reports (e.g. `sfp-missing` style reasons)
    Other(String),
}

impl InterfaceState {
    pub fn parse(state: &str) -> Self {
        match state {
            "up" => InterfaceState::Up,
            "down" => InterfaceState::Down,
            other => InterfaceState::Other(other.to_string()),
        }
    }

    pub fn is_up(&self) -> bool {
        *self == InterfaceState::Up
    }
}

impl fmt::Display for InterfaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceState::Up => f.write_str("up"),
            InterfaceState::Down => f.write_str("down"),
            InterfaceState::Other(state) => f.write_str(state),
        }
    }
}

/// Rate counters and attributes of one interface
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceRecord {
    /// Interface name, unique within one snapshot (e.g. "Ethernet1/1")
    pub name: String,
    pub state: InterfaceState,
    pub description: Option<String>,
    /// Link bandwidth in kbps
    pub bandwidth_kbps: u64,
    /// Load interval in seconds the rx rates are averaged over
    pub rx_interval_secs: u32,
    pub tx_interval_secs: u32,
    pub rx_bits: u64,
    pub rx_pps: u64,
    pub tx_bits: u64,
    pub tx_pps: u64,
    pub in_discards: Option<u64>,
    pub out_discards: Option<u64>,
}

impl InterfaceRecord {
    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }
}

/// A port-channel and its member interfaces in reported order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortChannelRecord {
    pub name: String,
    pub members: Vec<String>,
}
