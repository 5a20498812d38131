//! Typed record extraction from parsed rows
//!
//! Interface rows are validated one by one: a row with a missing or
//! non-numeric counter becomes a [`RecordError`] instead of aborting the run,
//! so the caller can skip it and report how many rows were dropped.

use std::collections::HashMap;
use std::str::FromStr;

use log::trace;

use crate::collectors::errors::RecordError;
use crate::collectors::parser::Row;
use crate::models::{CdpNeighbor, InterfaceRecord, InterfaceState, LldpNeighbor, PortChannelRecord};

/// Name used in errors for rows that lack their key field
const UNNAMED: &str = "<unnamed>";

fn require<'a>(row: &'a Row, record: &str, field: &'static str) -> Result<&'a str, RecordError> {
    row.get(field).ok_or_else(|| RecordError::MissingField {
        record: record.to_string(),
        field,
    })
}

fn number<T: FromStr>(row: &Row, record: &str, field: &'static str) -> Result<T, RecordError> {
    let value = require(row, record, field)?;
    value.trim().parse().map_err(|_| RecordError::InvalidNumber {
        record: record.to_string(),
        field,
        value: value.to_string(),
    })
}

fn optional_number<T: FromStr>(
    row: &Row,
    record: &str,
    field: &'static str,
) -> Result<Option<T>, RecordError> {
    match row.get(field) {
        Some(_) => number(row, record, field).map(Some),
        None => Ok(None),
    }
}

impl TryFrom<&Row> for InterfaceRecord {
    type Error = RecordError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        let name = require(row, UNNAMED, "interface")?;

        Ok(InterfaceRecord {
            name: name.to_string(),
            state: InterfaceState::parse(require(row, name, "state")?),
            description: row.get("desc").map(str::to_string),
            bandwidth_kbps: number(row, name, "eth_bw")?,
            rx_interval_secs: number(row, name, "eth_load_interval1_rx")?,
            tx_interval_secs: number(row, name, "eth_load_interval1_tx")?,
            rx_bits: number(row, name, "eth_inrate1_bits")?,
            rx_pps: number(row, name, "eth_inrate1_pkts")?,
            tx_bits: number(row, name, "eth_outrate1_bits")?,
            tx_pps: number(row, name, "eth_outrate1_pkts")?,
            in_discards: optional_number(row, name, "eth_indiscard")?,
            out_discards: optional_number(row, name, "eth_outdiscard")?,
        })
    }
}

/// Interfaces of one snapshot, in reported order and indexed by name
#[derive(Debug, Clone, Default)]
pub struct InterfaceTable {
    records: Vec<InterfaceRecord>,
    by_name: HashMap<String, usize>,
    rejected: Vec<RecordError>,
}

impl InterfaceTable {
    /// Validates every row; rejected rows and duplicate names are kept as errors
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut table = Self::default();
        for row in rows {
            match InterfaceRecord::try_from(row) {
                Ok(record) if table.by_name.contains_key(&record.name) => {
                    table.rejected.push(RecordError::Duplicate {
                        record: record.name,
                    });
                }
                Ok(record) => {
                    table.by_name.insert(record.name.clone(), table.records.len());
                    table.records.push(record);
                }
                Err(err) => {
                    trace!("Skipping interface row: {err}");
                    table.rejected.push(err);
                }
            }
        }
        table
    }

    pub fn get(&self, name: &str) -> Option<&InterfaceRecord> {
        self.by_name.get(name).map(|&index| &self.records[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &InterfaceRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows that did not yield a usable record
    pub fn rejected(&self) -> &[RecordError] {
        &self.rejected
    }
}

/// Channels with a name; member rows without a port are dropped
pub fn port_channels_from_rows(rows: &[Row]) -> Vec<PortChannelRecord> {
    rows.iter()
        .filter_map(|row| {
            let name = row.get("port-channel")?;
            let members = row
                .children("ROW_member")
                .filter_map(|member| member.get("port"))
                .map(str::to_string)
                .collect();
            Some(PortChannelRecord {
                name: name.to_string(),
                members,
            })
        })
        .collect()
}

/// CDP rows carrying all of local interface, device id and port id
pub fn cdp_neighbors_from_rows(rows: &[Row]) -> Vec<CdpNeighbor> {
    rows.iter()
        .filter_map(|row| {
            Some(CdpNeighbor {
                local_interface: row.get("intf_id")?.to_string(),
                device_id: row.get("device_id")?.to_string(),
                port_id: row.get("port_id")?.to_string(),
            })
        })
        .collect()
}

/// LLDP rows carrying all of local port, chassis id and port id
pub fn lldp_neighbors_from_rows(rows: &[Row]) -> Vec<LldpNeighbor> {
    rows.iter()
        .filter_map(|row| {
            Some(LldpNeighbor {
                local_port: row.get("l_port_id")?.to_string(),
                chassis_id: row.get("chassis_id")?.to_string(),
                port_id: row.get("port_id")?.to_string(),
            })
        })
        .collect()
}
