//! Memory logging use-cases.
//!
//! # Responsibility
//! - Provide the quick-log write path and date-ordered read paths.
//!
//! # Invariants
//! - Reads never mutate stored order; sorting happens on the way out.

use crate::model::memory::{Memory, NewMemory};
use crate::model::record::RecordId;
use crate::store::{CollectionStore, SortKey, StoreResult};
use log::info;
use rusqlite::Connection;

/// Use-case service for memory records.
pub struct MemoryService<'conn> {
    memories: CollectionStore<'conn, Memory>,
}

impl<'conn> MemoryService<'conn> {
    /// Constructs the service from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        Ok(Self {
            memories: CollectionStore::try_new(conn)?,
        })
    }

    /// Logs one memory from the quick-log flow.
    pub fn log_memory(&self, draft: NewMemory) -> StoreResult<Memory> {
        let memory = self.memories.create(draft)?;
        info!(
            "event=memory_logged module=service status=ok memory_id={} category={}",
            memory.meta.id, memory.category
        );
        Ok(memory)
    }

    /// All memories in insertion order (newest logged first).
    pub fn list(&self) -> StoreResult<Vec<Memory>> {
        self.memories.list(None)
    }

    /// All memories ordered by occurrence date, newest first.
    pub fn by_date_desc(&self) -> StoreResult<Vec<Memory>> {
        self.memories.list(Some(&SortKey::parse("-memory_date")))
    }

    /// The `limit` most recent memories by occurrence date.
    pub fn recent(&self, limit: usize) -> StoreResult<Vec<Memory>> {
        let mut memories = self.by_date_desc()?;
        memories.truncate(limit);
        Ok(memories)
    }

    /// Deletes one memory; idempotent.
    pub fn delete(&self, id: RecordId) -> StoreResult<bool> {
        self.memories.delete(id)
    }
}
