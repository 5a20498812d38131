//! CDP/LLDP neighbor lookup per local interface
//!
//! CDP is consulted first; LLDP is only searched when CDP has no entry for the
//! interface. The first matching row of a source wins.

use log::trace;

use crate::analyzers::normalizer::{normalize, normalize_hostname};
use crate::collectors::RemoveList;
use crate::models::{CdpNeighbor, LldpNeighbor};

/// Shown when neither source knows the interface
pub const NO_NEIGHBOR: &str = "---";

/// `remote-device-remote-port` for `interface`, or [`NO_NEIGHBOR`]
pub fn resolve(
    interface: &str,
    cdp: Option<&[CdpNeighbor]>,
    lldp: Option<&[LldpNeighbor]>,
    remove_list: &RemoveList,
) -> String {
    cdp.and_then(|table| cdp_neighbor(interface, table, remove_list))
        .or_else(|| lldp.and_then(|table| lldp_neighbor(interface, table, remove_list)))
        .unwrap_or_else(|| NO_NEIGHBOR.to_string())
}

/// Looks `interface` up by its long name in the CDP table
pub fn cdp_neighbor(
    interface: &str,
    table: &[CdpNeighbor],
    remove_list: &RemoveList,
) -> Option<String> {
    let neighbor = table.iter().find(|n| n.local_interface == interface)?;
    trace!("{interface}: CDP neighbor {}", neighbor.device_id);

    let device = normalize_hostname(&neighbor.device_id, remove_list);
    let port = format!("{}{}", letter_prefix(&neighbor.port_id), slot_path(&neighbor.port_id));
    Some(format!("{device}-{port}"))
}

/// Looks `interface` up by its "Eth1/1" short name in the LLDP table
pub fn lldp_neighbor(
    interface: &str,
    table: &[LldpNeighbor],
    remove_list: &RemoveList,
) -> Option<String> {
    let local = lldp_local_port(interface);
    let neighbor = table.iter().find(|n| n.local_port == local)?;
    trace!("{interface}: LLDP neighbor {}", neighbor.chassis_id);

    let chassis = normalize(&neighbor.chassis_id, remove_list);
    let port_tail = trailing_run(&neighbor.port_id, |c| c.is_ascii_digit() || c == '/' || c == ':');
    let port = format!("{}{port_tail}", letter_prefix(&neighbor.port_id));
    Some(format!("{chassis}-{port}"))
}

/// "Ethernet1/49" as LLDP reports local ports: "Eth1/49"
pub fn lldp_local_port(interface: &str) -> String {
    let prefix = match interface.find("Eth") {
        Some(index) if index + "Eth".len() < interface.len() => "Eth",
        _ => "",
    };
    format!("{prefix}{}", slot_path(interface))
}

/// Interface family letter: the first `E`, `G` or `T` followed by more text
fn letter_prefix(port: &str) -> &str {
    let mut chars = port.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        if matches!(c, 'E' | 'G' | 'T') && chars.peek().is_some() {
            return &port[index..index + 1];
        }
    }
    ""
}

/// Trailing `slot/module/port` path of an interface name, at most three segments
fn slot_path(name: &str) -> String {
    let run = trailing_run(name, |c| c.is_ascii_digit() || c == '/').trim_start_matches('/');
    if !run.ends_with(|c: char| c.is_ascii_digit()) {
        return String::new();
    }
    let segments: Vec<&str> = run.split('/').collect();
    segments[segments.len().saturating_sub(3)..].join("/")
}

/// Longest suffix of `text` made only of `allowed` characters
fn trailing_run(text: &str, allowed: impl Fn(char) -> bool) -> &str {
    let start = text
        .char_indices()
        .rev()
        .take_while(|&(_, c)| allowed(c))
        .last()
        .map_or(text.len(), |(index, _)| index);
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cdp(local: &str, device: &str, port: &str) -> CdpNeighbor {
        CdpNeighbor {
            local_interface: local.to_string(),
            device_id: device.to_string(),
            port_id: port.to_string(),
        }
    }

    fn lldp(local: &str, chassis: &str, port: &str) -> LldpNeighbor {
        LldpNeighbor {
            local_port: local.to_string(),
            chassis_id: chassis.to_string(),
            port_id: port.to_string(),
        }
    }

    #[test]
    fn test_port_short_forms() {
        assert_eq!(letter_prefix("Ethernet1/49"), "E");
        assert_eq!(letter_prefix("GigabitEthernet0/1"), "G");
        assert_eq!(letter_prefix("TenGigabitEthernet1/0/1"), "T");
        assert_eq!(letter_prefix("mgmt0"), "");
        assert_eq!(letter_prefix("E"), "");

        assert_eq!(slot_path("Ethernet1/49"), "1/49");
        assert_eq!(slot_path("TenGigabitEthernet1/0/1"), "1/0/1");
        assert_eq!(slot_path("Ethernet101/1/2/3"), "1/2/3");
        assert_eq!(slot_path("port-channel20"), "20");
        assert_eq!(slot_path("Ethernet1/"), "");

        assert_eq!(lldp_local_port("Ethernet1/49"), "Eth1/49");
        assert_eq!(lldp_local_port("mgmt0"), "0");
    }

    #[test]
    fn test_cdp_match_is_shortened() {
        let table = vec![
            cdp("Ethernet1/1", "dc1-core01.example.net(FDO2233X0AB)", "Ethernet2/17"),
            cdp("Ethernet1/2", "esx04", "vmnic1"),
        ];
        let list = RemoveList::new(["dc1-"]);

        assert_eq!(
            cdp_neighbor("Ethernet1/1", &table, &list).as_deref(),
            Some("core01-E2/17")
        );
        assert_eq!(cdp_neighbor("Ethernet1/2", &table, &list).as_deref(), Some("esx04-1"));
        assert_eq!(cdp_neighbor("Ethernet1/3", &table, &list), None);
    }

    #[test]
    fn test_first_matching_row_wins() {
        let table = vec![
            cdp("Ethernet1/1", "first", "Ethernet1/1"),
            cdp("Ethernet1/1", "second", "Ethernet1/2"),
        ];
        assert_eq!(
            resolve("Ethernet1/1", Some(table.as_slice()), None, &RemoveList::default()),
            "first-E1/1"
        );
    }

    #[test]
    fn test_lldp_is_used_when_cdp_has_no_match() {
        let cdp_table = vec![cdp("Ethernet1/1", "core01", "Ethernet2/1")];
        let lldp_table = vec![
            lldp("Eth1/1", "ignored", "Ethernet9/9"),
            lldp("Eth1/7", "connected-to-fw01", "GigabitEthernet0/0:1"),
        ];
        let list = RemoveList::new(["connected-to-"]);

        let result = resolve(
            "Ethernet1/7",
            Some(cdp_table.as_slice()),
            Some(lldp_table.as_slice()),
            &list,
        );
        assert_eq!(result, "fw01-G0/0:1");

        // CDP keeps precedence when both know the port
        let result = resolve(
            "Ethernet1/1",
            Some(cdp_table.as_slice()),
            Some(lldp_table.as_slice()),
            &list,
        );
        assert_eq!(result, "core01-E2/1");
    }

    #[test]
    fn test_lldp_chassis_keeps_dots() {
        let table = vec![lldp("Eth1/3", "0050.56ff.0a1b", "Gi1/0/24")];
        assert_eq!(
            lldp_neighbor("Ethernet1/3", &table, &RemoveList::default()).as_deref(),
            Some("0050.56ff.0a1b-G1/0/24")
        );
    }

    #[test]
    fn test_unknown_or_unavailable_sources_yield_sentinel() {
        let list = RemoveList::default();
        assert_eq!(resolve("Ethernet1/1", None, None, &list), NO_NEIGHBOR);
        assert_eq!(resolve("Ethernet1/1", Some(&[][..]), Some(&[][..]), &list), NO_NEIGHBOR);
    }
}
