//! Shared persistence metadata and the collection record contract.
//!
//! # Responsibility
//! - Define the identity and creation timestamp shared by every record.
//! - Define the [`CollectionRecord`] contract the store persists against.
//!
//! # Invariants
//! - `id` is stable and never reused within a collection.
//! - `created_at` is assigned by the store, never by the caller.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every record in a collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// Store-assigned identity and creation timestamp.
///
/// Serialized flattened into each record, so the persisted layout carries
/// plain `id` and `created_at` (RFC 3339) members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
}

impl RecordMeta {
    /// Issues fresh meta for a record created at `now`.
    pub fn issue(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: now,
        }
    }
}

/// Persistence contract implemented by every record kind.
///
/// The store only sees records through this trait: it assembles new records
/// from caller drafts, merges patches shallowly, and resolves sort fields
/// to canonical text.
pub trait CollectionRecord: Clone + Serialize + DeserializeOwned {
    /// Caller-supplied fields at creation time.
    type Draft;
    /// Shallow field merge applied on update; absent fields are preserved.
    type Patch;

    /// Storage key of the collection this record lives in.
    const COLLECTION_KEY: &'static str;

    /// Builds a full record from store-issued meta and a caller draft.
    fn assemble(meta: RecordMeta, draft: Self::Draft) -> Self;

    /// Store-assigned identity and creation timestamp.
    fn meta(&self) -> &RecordMeta;

    /// Merges patch fields over this record.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Canonical sortable text for a named field.
    ///
    /// `None` when the record has no value under that field; such records
    /// compare equal and keep their existing relative order.
    fn sort_text(&self, field: &str) -> Option<String>;
}
