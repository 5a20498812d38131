//! The interface rate command: query, cross-reference and print
//!
//! One run loads all data sources up front, then walks port-channels (channel
//! row first, members nested below), then every interface not claimed by a
//! channel, and finally prints the IO summary. Only member and standalone rows
//! add to the summary; channel rows would count their members twice.

use std::collections::HashSet;
use std::io::Write;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::analyzers::{compute_rates, normalize_description, resolve};
use crate::cli::table::{Columns, DisplayRow, TableRenderer};
use crate::collectors::records::{
    cdp_neighbors_from_rows, lldp_neighbors_from_rows, port_channels_from_rows,
};
use crate::collectors::{CommandGateway, DataSource, InterfaceTable, RemoveList, query_rows};
use crate::config::Settings;
use crate::models::{InterfaceRecord, NeighborTables, PortChannelRecord, RunningTotals};

/// Description column text for interfaces without a description
const NO_DESCRIPTION: &str = "---";

/// Row filters and optional columns of one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateOptions {
    /// Skip interfaces without a description
    pub description_only: bool,
    /// Skip interfaces whose state is not up
    pub up_only: bool,
    pub columns: Columns,
}

impl RateOptions {
    /// Whether `record` passes every active filter
    pub fn accepts(&self, record: &InterfaceRecord) -> bool {
        (!self.up_only || record.state.is_up())
            && (!self.description_only || record.has_description())
    }
}

/// Everything queried from the switch for one run
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub interfaces: InterfaceTable,
    pub channels: Vec<PortChannelRecord>,
    pub neighbors: NeighborTables,
    pub remove_list: RemoveList,
}

/// Rows to print, in order, and the totals over the rows that count
#[derive(Debug, Clone, Default)]
pub struct TablePlan {
    pub rows: Vec<DisplayRow>,
    pub totals: RunningTotals,
}

/// Outcome of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_rendered: usize,
    /// Interface rows dropped for missing or invalid fields
    pub rows_skipped: usize,
    pub totals: RunningTotals,
}

/// Orders and filters the snapshot into display rows
///
/// Every interface is visited once: an interface claimed by a port-channel
/// (as the channel itself or a member) is never listed again, even when a
/// filter hid it under its channel.
pub fn plan_rows(snapshot: &Snapshot, options: &RateOptions, settings: &Settings) -> TablePlan {
    let mut plan = TablePlan::default();
    let mut claimed: HashSet<&str> = HashSet::new();

    for channel in &snapshot.channels {
        if claimed.insert(channel.name.as_str()) {
            if let Some(record) = snapshot.interfaces.get(&channel.name) {
                if options.accepts(record) {
                    plan.rows.push(display_row(record, false, snapshot, options, settings));
                }
            }
        }

        for member in &channel.members {
            if !claimed.insert(member.as_str()) {
                continue;
            }
            let Some(record) = snapshot.interfaces.get(member) else {
                debug!("{}: member {member} has no interface record", channel.name);
                continue;
            };
            if options.accepts(record) {
                plan.rows.push(display_row(record, true, snapshot, options, settings));
                plan.totals.add(record);
            }
        }
    }

    for record in snapshot.interfaces.iter() {
        if claimed.contains(record.name.as_str()) || !options.accepts(record) {
            continue;
        }
        plan.rows.push(display_row(record, false, snapshot, options, settings));
        plan.totals.add(record);
    }

    plan
}

fn display_row(
    record: &InterfaceRecord,
    member: bool,
    snapshot: &Snapshot,
    options: &RateOptions,
    settings: &Settings,
) -> DisplayRow {
    let remove_list = &snapshot.remove_list;
    let description = record.description.as_deref().map_or_else(
        || NO_DESCRIPTION.to_string(),
        |desc| normalize_description(desc, remove_list, settings.max_descr_width),
    );
    let neighbor = options.columns.neighbor.then(|| {
        resolve(
            &record.name,
            snapshot.neighbors.cdp.as_deref(),
            snapshot.neighbors.lldp.as_deref(),
            remove_list,
        )
    });

    DisplayRow {
        member,
        name: record.name.clone(),
        description,
        neighbor,
        state: record.state.to_string(),
        rx_interval_secs: record.rx_interval_secs,
        tx_interval_secs: record.tx_interval_secs,
        rates: compute_rates(record.bandwidth_kbps, record.rx_bits, record.tx_bits),
        rx_pps: record.rx_pps,
        tx_pps: record.tx_pps,
        in_discards: record.in_discards,
        out_discards: record.out_discards,
    }
}

/// Runs the rate command against a gateway
pub struct RateCommandHandler<G> {
    gateway: G,
    settings: Settings,
}

impl<G: CommandGateway> RateCommandHandler<G> {
    pub fn new(gateway: G, settings: Settings) -> Self {
        Self { gateway, settings }
    }

    /// Loads every source, prints the table to `out` and returns the totals
    ///
    /// Fails only when the interface or port-channel data cannot be read.
    pub fn run<W: Write>(&mut self, options: &RateOptions, out: &mut W) -> Result<RunSummary> {
        writeln!(out)?;
        writeln!(out, "Collecting and processing interface statistics ...")?;
        writeln!(out)?;
        out.flush()?;

        let snapshot = self.load(options, out)?;
        let rows_skipped = snapshot.interfaces.rejected().len();
        if rows_skipped > 0 {
            warn!("{rows_skipped} interface rows skipped for incomplete data");
            for err in snapshot.interfaces.rejected() {
                debug!("Skipped: {err}");
            }
        }

        let plan = plan_rows(&snapshot, options, &self.settings);
        let renderer = TableRenderer::new(options.columns, &self.settings);
        for line in renderer.render(&plan.rows, &plan.totals) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;

        info!(
            "Rendered {} interfaces, rx {:.1} Mbps, tx {:.1} Mbps",
            plan.rows.len(),
            plan.totals.rx_mbps(),
            plan.totals.tx_mbps()
        );
        Ok(RunSummary {
            rows_rendered: plan.rows.len(),
            rows_skipped,
            totals: plan.totals,
        })
    }

    fn load<W: Write>(&mut self, options: &RateOptions, out: &mut W) -> Result<Snapshot> {
        let remove_list = RemoveList::fetch(&mut self.gateway);

        let rows = query_rows(&mut self.gateway, DataSource::Interfaces)
            .with_context(|| format!("cannot read {}", DataSource::Interfaces))?;
        let interfaces = InterfaceTable::from_rows(&rows);
        drop(rows);
        if interfaces.is_empty() {
            warn!("No complete interface rows in {}", DataSource::Interfaces);
        } else {
            debug!("{} interfaces loaded", interfaces.len());
        }

        let channels = match query_rows(&mut self.gateway, DataSource::PortChannels) {
            Ok(rows) => port_channels_from_rows(&rows),
            Err(err) if err.is_missing_rows() => {
                info!("No port-channels configured");
                Vec::new()
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("cannot read {}", DataSource::PortChannels));
            }
        };

        let neighbors = if options.columns.neighbor {
            self.load_neighbors(out)?
        } else {
            NeighborTables::default()
        };

        Ok(Snapshot {
            interfaces,
            channels,
            neighbors,
            remove_list,
        })
    }

    /// CDP and LLDP tables; a failing source is reported and left out
    fn load_neighbors<W: Write>(&mut self, out: &mut W) -> Result<NeighborTables> {
        let cdp = match query_rows(&mut self.gateway, DataSource::Cdp) {
            Ok(rows) => {
                writeln!(out, "Found some CDP neighbors!")?;
                Some(cdp_neighbors_from_rows(&rows))
            }
            Err(err) => {
                warn!("{}: {err}", DataSource::Cdp);
                writeln!(out, "No CDP neighbors found! Trying LLDP...")?;
                None
            }
        };

        let lldp = match query_rows(&mut self.gateway, DataSource::Lldp) {
            Ok(rows) => {
                writeln!(out, "Found some LLDP neighbors!")?;
                Some(lldp_neighbors_from_rows(&rows))
            }
            Err(err) => {
                warn!("{}: {err}", DataSource::Lldp);
                writeln!(out, "No LLDP neighbors found!")?;
                None
            }
        };
        writeln!(out)?;

        Ok(NeighborTables { cdp, lldp })
    }
}
