//! Interface throughput and packet rate tables for NX-OS switches
//!
//! The crate queries the switch CLI for `show interface`, `show port-channel
//! summary` and optionally CDP/LLDP neighbors, cross-references the replies and
//! renders a fixed-width table with an IO summary.

pub mod analyzers;
pub mod cli;
pub mod collectors;
pub mod config;
pub mod models;
