//! Throughput figures derived from interface bit-rate counters
//!
//! NX-OS reports rates in bits per second and link bandwidth in kbps. All
//! derived figures are rounded to one decimal, the precision the table shows.

/// Mbps and link utilization of one interface in both directions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub rx_mbps: f64,
    /// `None` when the link bandwidth is unknown (zero)
    pub rx_percent: Option<f64>,
    pub tx_mbps: f64,
    pub tx_percent: Option<f64>,
}

/// Computes rx/tx Mbps and percent of `bandwidth_kbps`
///
/// # Examples
///
/// ```
/// use nx_ifrate::analyzers::rates::compute_rates;
///
/// let rates = compute_rates(1_000_000, 500_000_000, 250_000_000);
/// assert_eq!(rates.rx_mbps, 500.0);
/// assert_eq!(rates.rx_percent, Some(50.0));
/// assert_eq!(rates.tx_percent, Some(25.0));
///
/// assert_eq!(compute_rates(0, 1_000, 1_000).rx_percent, None);
/// ```
pub fn compute_rates(bandwidth_kbps: u64, rx_bits: u64, tx_bits: u64) -> Rates {
    Rates {
        rx_mbps: bits_to_mbps(rx_bits),
        rx_percent: link_utilization(rx_bits, bandwidth_kbps),
        tx_mbps: bits_to_mbps(tx_bits),
        tx_percent: link_utilization(tx_bits, bandwidth_kbps),
    }
}

pub fn bits_to_mbps(bits: u64) -> f64 {
    round_one_decimal(bits as f64 / 1_000_000.0)
}

/// Percent of link capacity used by `bits`; `None` for a zero bandwidth
pub fn link_utilization(bits: u64, bandwidth_kbps: u64) -> Option<f64> {
    if bandwidth_kbps == 0 {
        return None;
    }
    let kbits = bits as f64 / 1000.0;
    Some(round_one_decimal(kbits * 100.0 / bandwidth_kbps as f64))
}

/// Rounds the exact binary value half to even, as `{:.1}` formatting does
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

pub fn format_mbps(mbps: f64) -> String {
    format!("{mbps:.1}")
}

/// "12.5%", or "---" when utilization is unknown
pub fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(percent) => format!("{percent:.1}%"),
        None => "---".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_rates() {
        let rates = compute_rates(1_000_000, 500_000_000, 250_000_000);
        assert_eq!(
            rates,
            Rates {
                rx_mbps: 500.0,
                rx_percent: Some(50.0),
                tx_mbps: 250.0,
                tx_percent: Some(25.0),
            }
        );
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        assert_eq!(bits_to_mbps(0), 0.0);
        assert_eq!(bits_to_mbps(1_234_567), 1.2);
        assert_eq!(bits_to_mbps(1_250_001), 1.3);
        assert_eq!(bits_to_mbps(999), 0.0);

        // 10G link carrying 123.456 Mbps
        assert_eq!(link_utilization(123_456_000, 10_000_000), Some(1.2));
        // 1G link at line rate
        assert_eq!(link_utilization(1_000_000_000, 1_000_000), Some(100.0));
    }

    #[test]
    fn test_ties_round_on_the_exact_value() {
        // 0.15 is stored just below the tie, 1.25 is an exact tie and goes to even
        assert_eq!(format_mbps(bits_to_mbps(150_000)), "0.1");
        assert_eq!(format_mbps(bits_to_mbps(1_250_000)), "1.2");
        assert_eq!(format_mbps(bits_to_mbps(1_350_000)), "1.4");
        assert_eq!(round_one_decimal(0.25), 0.2);
        assert_eq!(link_utilization(25_000, 10_000), Some(0.2));
    }

    #[test]
    fn test_zero_bandwidth_has_no_percent() {
        let rates = compute_rates(0, 5_000_000, 0);
        assert_eq!(rates.rx_mbps, 5.0);
        assert_eq!(rates.rx_percent, None);
        assert_eq!(rates.tx_percent, None);
        assert_eq!(format_percent(rates.rx_percent), "---");
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_mbps(0.0), "0.0");
        assert_eq!(format_mbps(1234.5), "1234.5");
        assert_eq!(format_percent(Some(7.0)), "7.0%");
        assert_eq!(format_percent(Some(0.1)), "0.1%");
    }
}
