//! Collection persistence layer.
//!
//! # Responsibility
//! - Provide CRUD over one whole-collection JSON value per record kind.
//! - Surface semantic errors (`NotFound`, `Corrupted`) next to transport
//!   errors.
//!
//! # Invariants
//! - Every mutation reads the full collection, mutates in memory and writes
//!   the full collection back; last writer wins at that granularity.
//! - Corrupted payloads are reported, never silently reset to empty.

use crate::db::DbError;
use crate::model::record::RecordId;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod collection;
mod sort;

pub use collection::CollectionStore;
pub use sort::SortKey;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for collection persistence and lookup operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Update target does not exist; no change was persisted.
    NotFound(RecordId),
    /// Persisted payload does not parse as the collection's record list.
    Corrupted {
        collection: &'static str,
        message: String,
    },
    /// Records could not be serialized for persistence.
    Encode {
        collection: &'static str,
        message: String,
    },
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Corrupted {
                collection,
                message,
            } => write!(f, "corrupted payload in collection `{collection}`: {message}"),
            Self::Encode {
                collection,
                message,
            } => write!(f, "cannot encode collection `{collection}`: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
