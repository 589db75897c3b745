//! Vault fact use-cases.
//!
//! # Responsibility
//! - Provide the inline add, kind-scoped search and removal paths.
//!
//! # Invariants
//! - Content is trimmed before persistence; blank facts are rejected here,
//!   not in the store.

use crate::model::record::RecordId;
use crate::model::vault::{NewVaultItem, VaultItem, VaultKind};
use crate::query::projections::filter_by_kind_and_text;
use crate::store::{CollectionStore, StoreError, StoreResult};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type VaultResult<T> = Result<T, VaultError>;

/// Vault-layer error on top of store transport errors.
#[derive(Debug)]
pub enum VaultError {
    /// Fact content was empty after trimming.
    EmptyContent,
    Store(StoreError),
}

impl Display for VaultError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "vault fact content cannot be empty"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for VaultError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyContent => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for VaultError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case service for vault facts.
pub struct VaultService<'conn> {
    items: CollectionStore<'conn, VaultItem>,
}

impl<'conn> VaultService<'conn> {
    /// Constructs the service from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        Ok(Self {
            items: CollectionStore::try_new(conn)?,
        })
    }

    /// Adds one trimmed fact of the given kind.
    pub fn add_fact(&self, kind: VaultKind, content: &str) -> VaultResult<VaultItem> {
        let content = content.trim();
        if content.is_empty() {
            return Err(VaultError::EmptyContent);
        }
        Ok(self.items.create(NewVaultItem {
            kind,
            content: content.to_string(),
        })?)
    }

    /// All facts in insertion order (newest added first).
    pub fn list(&self) -> StoreResult<Vec<VaultItem>> {
        self.items.list(None)
    }

    /// Facts of `kind` whose content matches `text` case-insensitively.
    pub fn search(&self, kind: &VaultKind, text: &str) -> StoreResult<Vec<VaultItem>> {
        Ok(filter_by_kind_and_text(&self.items.list(None)?, kind, text))
    }

    /// Removes one fact; idempotent.
    pub fn remove(&self, id: RecordId) -> StoreResult<bool> {
        self.items.delete(id)
    }
}
