//! Single-key sort requests for collection listings.
//!
//! # Responsibility
//! - Parse `field` / `-field` sort parameters.
//! - Apply a stable sort over a record slice without mutating stored order.

use crate::model::record::CollectionRecord;
use std::cmp::Ordering;

/// Parsed sort request; a leading `-` selects descending order.
///
/// Sorting is stable: ties and records without the field keep their prior
/// relative order, so default newest-first insertion order remains the
/// secondary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    field: String,
    descending: bool,
}

impl SortKey {
    /// Parses a sort parameter of the form `field` or `-field`.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('-') {
            Some(field) => Self {
                field: field.to_string(),
                descending: true,
            },
            None => Self {
                field: raw.to_string(),
                descending: false,
            },
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }

    /// Sorts `records` in place by this key.
    pub(crate) fn apply<R: CollectionRecord>(&self, records: &mut [R]) {
        records.sort_by(|left, right| {
            match (left.sort_text(&self.field), right.sort_text(&self.field)) {
                (Some(left), Some(right)) => {
                    let ordering = left.cmp(&right);
                    if self.descending {
                        ordering.reverse()
                    } else {
                        ordering
                    }
                }
                // A record without the field compares equal and keeps its
                // position under the stable sort.
                _ => Ordering::Equal,
            }
        });
    }
}
