//! Filter engine: maps (records, query, selected tags, sort mode) to results.
//!
//! Pure functions only. Results are expressed as positions into the input
//! slice, so they are always a subsequence (or, when sorted, a permutation of
//! a subset) of the dataset and the dataset itself is never reordered.

use crate::model::{Record, SortMode};
use std::collections::BTreeSet;

/// Trim and lower-case a raw query. An empty result matches everything.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Text predicate. `needle` must already be normalized.
///
/// A record matches when its title, its author, or its space-joined tag list
/// contains the needle, compared lower-cased.
pub fn matches_text(record: &Record, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(needle)
        || record.author.to_lowercase().contains(needle)
        || record.tags.join(" ").to_lowercase().contains(needle)
}

/// Tag predicate: the record carries every selected tag.
pub fn matches_tags(record: &Record, selected: &BTreeSet<String>) -> bool {
    selected.iter().all(|tag| record.has_tag(tag))
}

/// Positions of the records that survive filtering, in output order.
pub fn filter_indices(
    records: &[Record],
    query: &str,
    selected_tags: &BTreeSet<String>,
    sort_mode: SortMode,
) -> Vec<usize> {
    let needle = normalize_query(query);

    let mut positions: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches_text(r, &needle) && matches_tags(r, selected_tags))
        .map(|(i, _)| i)
        .collect();

    if sort_mode == SortMode::RatingDescending {
        // sort_by is stable: equal ratings keep dataset order.
        positions.sort_by(|&a, &b| {
            records[b]
                .rating_key()
                .total_cmp(&records[a].rating_key())
        });
    }

    positions
}

/// Surviving records, in output order.
pub fn filter<'a>(
    records: &'a [Record],
    query: &str,
    selected_tags: &BTreeSet<String>,
    sort_mode: SortMode,
) -> Vec<&'a Record> {
    filter_indices(records, query, selected_tags, sort_mode)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
