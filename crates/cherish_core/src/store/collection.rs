//! Whole-collection JSON store over SQLite.
//!
//! # Responsibility
//! - Persist one ordered record collection as a single JSON array value.
//! - Provide CRUD with store-assigned identity and stable sorting.
//!
//! # Invariants
//! - Every mutation rewrites the full collection (last writer wins).
//! - Created records are prepended, so default list order is newest-first.
//! - No field validation happens here; values are stored as given.

use crate::db::migrations::latest_version;
use crate::model::record::{CollectionRecord, RecordId, RecordMeta};
use crate::store::{SortKey, StoreError, StoreResult};
use chrono::Utc;
use log::debug;
use rusqlite::{params, Connection};
use std::marker::PhantomData;

/// Store handle for one record kind's collection.
pub struct CollectionStore<'conn, R: CollectionRecord> {
    conn: &'conn Connection,
    _record: PhantomData<R>,
}

impl<'conn, R: CollectionRecord> CollectionStore<'conn, R> {
    /// Constructs a store from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self {
            conn,
            _record: PhantomData,
        })
    }

    /// Returns all records, optionally sorted by one field.
    ///
    /// Without a sort key, records come back in insertion order
    /// (newest-first). An absent collection yields an empty list.
    pub fn list(&self, sort: Option<&SortKey>) -> StoreResult<Vec<R>> {
        let mut records = self.load()?;
        if let Some(sort) = sort {
            sort.apply(&mut records);
        }
        Ok(records)
    }

    /// Assigns fresh meta, prepends the record and persists the collection.
    pub fn create(&self, draft: R::Draft) -> StoreResult<R> {
        let mut records = self.load()?;
        let record = R::assemble(RecordMeta::issue(Utc::now()), draft);
        records.insert(0, record.clone());
        self.save(&records)?;
        debug!(
            "event=record_create module=store status=ok collection={} size={}",
            R::COLLECTION_KEY,
            records.len()
        );
        Ok(record)
    }

    /// Merges a patch over the record with `id` and persists.
    ///
    /// Signals [`StoreError::NotFound`] without change when `id` is absent.
    pub fn update(&self, id: RecordId, patch: R::Patch) -> StoreResult<R> {
        let mut records = self.load()?;
        let Some(record) = records.iter_mut().find(|record| record.meta().id == id) else {
            return Err(StoreError::NotFound(id));
        };
        record.apply_patch(patch);
        let updated = record.clone();
        self.save(&records)?;
        Ok(updated)
    }

    /// Removes the record with `id` if present; idempotent.
    ///
    /// Returns whether a record was removed. The remaining collection is
    /// persisted either way, per the storage contract.
    pub fn delete(&self, id: RecordId) -> StoreResult<bool> {
        let mut records = self.load()?;
        let len_before = records.len();
        records.retain(|record| record.meta().id != id);
        let removed = records.len() != len_before;
        self.save(&records)?;
        debug!(
            "event=record_delete module=store status=ok collection={} removed={removed}",
            R::COLLECTION_KEY
        );
        Ok(removed)
    }

    fn load(&self) -> StoreResult<Vec<R>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM collections WHERE key = ?1;")?;
        let mut rows = stmt.query([R::COLLECTION_KEY])?;
        let Some(row) = rows.next()? else {
            return Ok(Vec::new());
        };
        let payload: String = row.get(0)?;
        serde_json::from_str(&payload).map_err(|err| StoreError::Corrupted {
            collection: R::COLLECTION_KEY,
            message: err.to_string(),
        })
    }

    fn save(&self, records: &[R]) -> StoreResult<()> {
        let payload = serde_json::to_string(records).map_err(|err| StoreError::Encode {
            collection: R::COLLECTION_KEY,
            message: err.to_string(),
        })?;
        self.conn.execute(
            "INSERT INTO collections (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![R::COLLECTION_KEY, payload],
        )?;
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version < expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: bool = conn.query_row(
        "SELECT EXISTS (
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'collections'
         );",
        [],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Err(StoreError::MissingRequiredTable("collections"));
    }

    Ok(())
}
