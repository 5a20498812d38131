//! Neighbor-discovery records

/// One row of `show cdp neighbors`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdpNeighbor {
    /// Local interface in long form, e.g. "Ethernet1/49"
    pub local_interface: String,
    /// Remote device id, possibly with serial "(...)" and domain suffixes
    pub device_id: String,
    pub port_id: String,
}

/// One row of `show lldp neighbors`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LldpNeighbor {
    /// Local port in LLDP short form, e.g. "Eth1/49"
    pub local_port: String,
    pub chassis_id: String,
    pub port_id: String,
}

/// Neighbor sources available for one run; `None` means the query failed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborTables {
    pub cdp: Option<Vec<CdpNeighbor>>,
    pub lldp: Option<Vec<LldpNeighbor>>,
}
