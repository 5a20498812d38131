//! Fixed-width text table of interface rates
//!
//! Every cell is left aligned and padded to its column width. Port-channel
//! members are indented by one space so they nest under their channel row.

use crate::analyzers::NO_NEIGHBOR;
use crate::analyzers::normalizer::truncate_chars;
use crate::analyzers::rates::{Rates, format_mbps, format_percent};
use crate::config::Settings;
use crate::models::RunningTotals;

const PORT_WIDTH: usize = 17;
const STATE_WIDTH: usize = 6;
const INTERVAL_WIDTH: usize = 8;
const MBPS_WIDTH: usize = 9;
const PERCENT_WIDTH: usize = 7;
const PPS_WIDTH: usize = 9;
const DISCARD_WIDTH: usize = 8;

/// Placeholder for values an interface does not report
const MISSING: &str = "---";

/// Optional columns enabled for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub neighbor: bool,
    pub interval: bool,
    pub discards: bool,
}

/// One interface line, already shortened for display
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// Nested under a port-channel row
    pub member: bool,
    pub name: String,
    pub description: String,
    pub neighbor: Option<String>,
    pub state: String,
    pub rx_interval_secs: u32,
    pub tx_interval_secs: u32,
    pub rates: Rates,
    pub rx_pps: u64,
    pub tx_pps: u64,
    pub in_discards: Option<u64>,
    pub out_discards: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct TableRenderer {
    columns: Columns,
    descr_width: usize,
    neigh_width: usize,
}

impl TableRenderer {
    pub fn new(columns: Columns, settings: &Settings) -> Self {
        Self {
            columns,
            descr_width: settings.max_descr_width,
            neigh_width: settings.max_neigh_width,
        }
    }

    pub fn header(&self) -> String {
        let mut line = String::new();
        cell(&mut line, "Port", PORT_WIDTH);
        cell(&mut line, "Descr", self.descr_width);
        if self.columns.neighbor {
            cell(&mut line, "C/L-Neighbor", self.neigh_width);
        }
        cell(&mut line, "State", STATE_WIDTH);
        if self.columns.interval {
            cell(&mut line, "Intvl", INTERVAL_WIDTH);
        }
        cell(&mut line, "Rx Mbps", MBPS_WIDTH);
        cell(&mut line, "Rx %", PERCENT_WIDTH);
        cell(&mut line, "Rx pps", PPS_WIDTH);
        if self.columns.discards {
            cell(&mut line, "InDisc", DISCARD_WIDTH);
        }
        cell(&mut line, "Tx Mbps", MBPS_WIDTH);
        cell(&mut line, "Tx %", PERCENT_WIDTH);
        cell(&mut line, "Tx pps", PPS_WIDTH);
        if self.columns.discards {
            cell(&mut line, "OutDisc", DISCARD_WIDTH);
        }
        line
    }

    /// Dashed rule as wide as the header
    pub fn separator(&self) -> String {
        "-".repeat(self.header().chars().count())
    }

    pub fn row(&self, row: &DisplayRow) -> String {
        let mut line = String::new();
        if row.member {
            line.push(' ');
            cell(&mut line, &row.name, PORT_WIDTH - 1);
        } else {
            cell(&mut line, &row.name, PORT_WIDTH);
        }
        cell(&mut line, &row.description, self.descr_width);
        if self.columns.neighbor {
            let neighbor = row.neighbor.as_deref().unwrap_or(NO_NEIGHBOR);
            let shown = truncate_chars(neighbor, self.neigh_width.saturating_sub(1));
            cell(&mut line, &shown, self.neigh_width);
        }
        cell(&mut line, &row.state, STATE_WIDTH);
        if self.columns.interval {
            let interval = format!("{}/{}", row.rx_interval_secs, row.tx_interval_secs);
            cell(&mut line, &interval, INTERVAL_WIDTH);
        }
        cell(&mut line, &format_mbps(row.rates.rx_mbps), MBPS_WIDTH);
        cell(&mut line, &format_percent(row.rates.rx_percent), PERCENT_WIDTH);
        cell(&mut line, &row.rx_pps.to_string(), PPS_WIDTH);
        if self.columns.discards {
            cell(&mut line, &optional_count(row.in_discards), DISCARD_WIDTH);
        }
        cell(&mut line, &format_mbps(row.rates.tx_mbps), MBPS_WIDTH);
        cell(&mut line, &format_percent(row.rates.tx_percent), PERCENT_WIDTH);
        cell(&mut line, &row.tx_pps.to_string(), PPS_WIDTH);
        if self.columns.discards {
            cell(&mut line, &optional_count(row.out_discards), DISCARD_WIDTH);
        }
        line
    }

    /// "IO Summary:" line with only the aggregate Mbps cells filled
    pub fn summary(&self, totals: &RunningTotals) -> String {
        let mut line = String::new();
        cell(&mut line, "IO Summary:", PORT_WIDTH);
        cell(&mut line, "", self.descr_width);
        if self.columns.neighbor {
            cell(&mut line, "", self.neigh_width);
        }
        cell(&mut line, "", STATE_WIDTH);
        if self.columns.interval {
            cell(&mut line, "", INTERVAL_WIDTH);
        }
        cell(&mut line, &format_mbps(totals.rx_mbps()), MBPS_WIDTH);
        cell(&mut line, "", PERCENT_WIDTH);
        cell(&mut line, "", PPS_WIDTH);
        if self.columns.discards {
            cell(&mut line, "", DISCARD_WIDTH);
        }
        cell(&mut line, &format_mbps(totals.tx_mbps()), MBPS_WIDTH);
        cell(&mut line, "", PERCENT_WIDTH);
        cell(&mut line, "", PPS_WIDTH);
        if self.columns.discards {
            cell(&mut line, "", DISCARD_WIDTH);
        }
        line
    }

    /// The complete table: rules, header, rows and summary
    pub fn render(&self, rows: &[DisplayRow], totals: &RunningTotals) -> Vec<String> {
        let separator = self.separator();
        let mut lines = Vec::with_capacity(rows.len() + 5);
        lines.push(separator.clone());
        lines.push(self.header());
        lines.push(separator.clone());
        lines.extend(rows.iter().map(|row| self.row(row)));
        lines.push(separator);
        lines.push(self.summary(totals));
        lines
    }
}

/// Appends `text` left aligned in a column of `width` characters
///
/// Text longer than the column is kept whole.
fn cell(line: &mut String, text: &str, width: usize) {
    line.push_str(text);
    let used = text.chars().count();
    line.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
}

fn optional_count(value: Option<u64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |count| count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::compute_rates;

    fn sample_row() -> DisplayRow {
        DisplayRow {
            member: false,
            name: "Ethernet1/1".to_string(),
            description: "core01".to_string(),
            neighbor: Some("core01-E2/1".to_string()),
            state: "up".to_string(),
            rx_interval_secs: 30,
            tx_interval_secs: 300,
            rates: compute_rates(10_000_000, 1_500_000_000, 250_000_000),
            rx_pps: 125_000,
            tx_pps: 20_833,
            in_discards: Some(12),
            out_discards: None,
        }
    }

    fn pad(text: &str, width: usize) -> String {
        format!("{text:<width$}")
    }

    #[test]
    fn test_default_header_and_separator() {
        let renderer = TableRenderer::new(Columns::default(), &Settings::default());
        let expected = [
            pad("Port", 17),
            pad("Descr", 23),
            pad("State", 6),
            pad("Rx Mbps", 9),
            pad("Rx %", 7),
            pad("Rx pps", 9),
            pad("Tx Mbps", 9),
            pad("Tx %", 7),
            pad("Tx pps", 9),
        ]
        .concat();

        assert_eq!(renderer.header(), expected);
        assert_eq!(renderer.separator(), "-".repeat(96));
    }

    #[test]
    fn test_optional_columns_extend_header() {
        let columns = Columns {
            neighbor: true,
            interval: true,
            discards: true,
        };
        let renderer = TableRenderer::new(columns, &Settings::default());
        let header = renderer.header();

        assert_eq!(header.len(), 96 + 30 + 8 + 8 + 8);
        assert!(header.contains("C/L-Neighbor"));
        assert!(header.contains("Intvl"));
        assert!(header.find("InDisc") < header.find("Tx Mbps"));
        assert!(header.trim_end().ends_with("OutDisc"));
    }

    #[test]
    fn test_row_layout() {
        let renderer = TableRenderer::new(Columns::default(), &Settings::default());
        let expected = [
            pad("Ethernet1/1", 17),
            pad("core01", 23),
            pad("up", 6),
            pad("1500.0", 9),
            pad("15.0%", 7),
            pad("125000", 9),
            pad("250.0", 9),
            pad("2.5%", 7),
            pad("20833", 9),
        ]
        .concat();
        assert_eq!(renderer.row(&sample_row()), expected);
    }

    #[test]
    fn test_row_with_all_columns() {
        let columns = Columns {
            neighbor: true,
            interval: true,
            discards: true,
        };
        let renderer = TableRenderer::new(columns, &Settings::default());
        let line = renderer.row(&sample_row());

        assert_eq!(&line[40..70], pad("core01-E2/1", 30));
        assert_eq!(&line[76..84], pad("30/300", 8));
        assert_eq!(&line[109..117], pad("12", 8));
        assert_eq!(&line[142..150], pad("---", 8));
        assert_eq!(line.len(), renderer.header().len());
    }

    #[test]
    fn test_member_rows_are_indented_but_aligned() {
        let renderer = TableRenderer::new(Columns::default(), &Settings::default());
        let mut member = sample_row();
        member.member = true;

        let line = renderer.row(&member);
        assert!(line.starts_with(" Ethernet1/1"));
        assert_eq!(&line[17..23], "core01");
        assert_eq!(line.len(), renderer.row(&sample_row()).len());
    }

    #[test]
    fn test_long_neighbor_is_truncated_and_missing_shows_sentinel() {
        let columns = Columns {
            neighbor: true,
            ..Columns::default()
        };
        let renderer = TableRenderer::new(columns, &Settings::default());

        let mut row = sample_row();
        row.neighbor = Some("x".repeat(40));
        let line = renderer.row(&row);
        assert_eq!(&line[40..70], format!("{} ", "x".repeat(29)));

        row.neighbor = None;
        let line = renderer.row(&row);
        assert_eq!(&line[40..70], pad("---", 30));
    }

    #[test]
    fn test_zero_bandwidth_row_still_renders() {
        let renderer = TableRenderer::new(Columns::default(), &Settings::default());
        let mut row = sample_row();
        row.rates = compute_rates(0, 1_000_000, 0);

        let line = renderer.row(&row);
        assert_eq!(&line[46..55], pad("1.0", 9));
        assert_eq!(&line[55..62], pad("---", 7));
    }

    #[test]
    fn test_summary_fills_only_totals() {
        let renderer = TableRenderer::new(Columns::default(), &Settings::default());
        let summary = renderer.summary(&RunningTotals::new());

        assert!(summary.starts_with("IO Summary:"));
        assert_eq!(&summary[46..55], pad("0.0", 9));
        assert_eq!(&summary[71..80], pad("0.0", 9));
        assert_eq!(summary.len(), renderer.header().len());
    }

    #[test]
    fn test_render_frames_rows() {
        let renderer = TableRenderer::new(Columns::default(), &Settings::default());
        let lines = renderer.render(&[sample_row()], &RunningTotals::new());

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], renderer.separator());
        assert_eq!(lines[1], renderer.header());
        assert_eq!(lines[4], renderer.separator());
        assert!(lines[5].starts_with("IO Summary:"));
    }
}
