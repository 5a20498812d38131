//! Aggregate rx/tx accumulation for one run

use crate::analyzers::rates::bits_to_mbps;
use crate::models::InterfaceRecord;

/// Sum of rx/tx bit rates over the physical interfaces rendered in one run
///
/// Port-channel aggregate rows are never added, their members already are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningTotals {
    rx_bits: u64,
    tx_bits: u64,
}

impl RunningTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: &InterfaceRecord) {
        self.rx_bits = self.rx_bits.saturating_add(record.rx_bits);
        self.tx_bits = self.tx_bits.saturating_add(record.tx_bits);
    }

    pub fn rx_bits(&self) -> u64 {
        self.rx_bits
    }

    pub fn tx_bits(&self) -> u64 {
        self.tx_bits
    }

    pub fn rx_mbps(&self) -> f64 {
        bits_to_mbps(self.rx_bits)
    }

    pub fn tx_mbps(&self) -> f64 {
        bits_to_mbps(self.tx_bits)
    }
}
