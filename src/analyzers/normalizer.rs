//! Shortening of descriptions and neighbor names for narrow table columns

use crate::collectors::RemoveList;

/// Removes every remove-list entry from `text`, in list order, in one pass
///
/// A removal that creates a new match for an earlier entry is not rescanned.
pub fn normalize(text: &str, remove_list: &RemoveList) -> String {
    remove_list
        .entries()
        .iter()
        .fold(text.to_string(), |acc, entry| acc.replace(entry.as_str(), ""))
}

/// Interface description as shown in the `Descr` column
///
/// Keeps at most `max_width - 1` characters so one column of padding remains.
pub fn normalize_description(
    description: &str,
    remove_list: &RemoveList,
    max_width: usize,
) -> String {
    let shortened = normalize(description, remove_list).replace("Ethernet", "e");
    truncate_chars(&shortened, max_width.saturating_sub(1))
}

/// CDP device id without serial number "(...)" or domain suffix
pub fn normalize_hostname(device_id: &str, remove_list: &RemoveList) -> String {
    let host = device_id.split('(').next().unwrap_or_default();
    let host = host.split('.').next().unwrap_or_default();
    normalize(host, remove_list)
}

/// First `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
