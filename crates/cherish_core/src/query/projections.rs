//! Calendar and vault projections.
//!
//! # Responsibility
//! - Derive calendar-by-date views and category/kind lookups.
//!
//! # Invariants
//! - Input relative order is preserved within every projection group.
//! - No function mutates its input or panics on empty data.

use crate::model::memory::{Memory, MemoryCategory};
use crate::model::vault::{VaultItem, VaultKind};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Partitions memories by occurrence date.
///
/// Each group keeps the relative order of the input sequence.
pub fn group_by_date(memories: &[Memory]) -> BTreeMap<NaiveDate, Vec<Memory>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<Memory>> = BTreeMap::new();
    for memory in memories {
        grouped
            .entry(memory.memory_date)
            .or_default()
            .push(memory.clone());
    }
    grouped
}

/// Maps each requested category to the occurrence date of its first match
/// in input order; categories with no match are omitted.
///
/// Over a most-recent-first list this yields the latest entry per category.
pub fn most_recent_by_category(
    memories: &[Memory],
    categories: &[MemoryCategory],
) -> BTreeMap<MemoryCategory, NaiveDate> {
    let mut latest = BTreeMap::new();
    for category in categories {
        if let Some(memory) = memories.iter().find(|memory| memory.category == *category) {
            latest.insert(category.clone(), memory.memory_date);
        }
    }
    latest
}

/// Returns memories whose occurrence date matches `date` exactly.
pub fn filter_by_date(memories: &[Memory], date: NaiveDate) -> Vec<Memory> {
    memories
        .iter()
        .filter(|memory| memory.memory_date == date)
        .cloned()
        .collect()
}

/// Returns vault items of `kind` whose content contains `needle`,
/// case-insensitively. An empty needle matches every item of the kind.
pub fn filter_by_kind_and_text(
    items: &[VaultItem],
    kind: &VaultKind,
    needle: &str,
) -> Vec<VaultItem> {
    let needle = needle.to_lowercase();
    items
        .iter()
        .filter(|item| item.kind == *kind && item.content.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
