//! Full-snapshot export, restore and wipe.
//!
//! # Responsibility
//! - Serialize the three collections into one backup document.
//! - Restore backup content through regular create calls.
//! - Delete all stored data deterministically.
//!
//! # Invariants
//! - Export never mutates stored data.
//! - Restore issues fresh identifiers; exported ids are never reused.
//! - Wipe deletes per record, sequenced, and converges to empty
//!   collections.

use crate::model::memory::{Memory, NewMemory};
use crate::model::partner::{NewPartner, Partner};
use crate::model::vault::{NewVaultItem, VaultItem};
use crate::store::{CollectionStore, StoreError, StoreResult};
use chrono::{DateTime, NaiveDate, Utc};
use log::info;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

/// Snapshot of everything the application stores.
///
/// Field names match the downloadable document layout of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupDocument {
    pub partner: Option<Partner>,
    pub memories: Vec<Memory>,
    #[serde(rename = "vaultItems")]
    pub vault_items: Vec<VaultItem>,
    #[serde(rename = "exportedAt")]
    pub exported_at: DateTime<Utc>,
}

/// Outcome counters for [`BackupService::restore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    pub partner_restored: bool,
    pub memories_restored: usize,
    pub vault_items_restored: usize,
}

/// Outcome counters for [`BackupService::wipe_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WipeSummary {
    pub memories_deleted: usize,
    pub vault_items_deleted: usize,
    pub partners_deleted: usize,
}

/// Use-case service for backup and full-wipe flows.
pub struct BackupService<'conn> {
    partners: CollectionStore<'conn, Partner>,
    memories: CollectionStore<'conn, Memory>,
    vault_items: CollectionStore<'conn, VaultItem>,
}

impl<'conn> BackupService<'conn> {
    /// Constructs the service from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        Ok(Self {
            partners: CollectionStore::try_new(conn)?,
            memories: CollectionStore::try_new(conn)?,
            vault_items: CollectionStore::try_new(conn)?,
        })
    }

    /// Builds the export snapshot without mutating stored data.
    pub fn export(&self) -> StoreResult<BackupDocument> {
        Ok(BackupDocument {
            partner: self.partners.list(None)?.into_iter().next(),
            memories: self.memories.list(None)?,
            vault_items: self.vault_items.list(None)?,
            exported_at: Utc::now(),
        })
    }

    /// Export snapshot as pretty-printed JSON, ready for download.
    pub fn export_json(&self) -> StoreResult<String> {
        let document = self.export()?;
        serde_json::to_string_pretty(&document).map_err(|err| StoreError::Encode {
            collection: "backup",
            message: err.to_string(),
        })
    }

    /// Download file name for a backup taken on `today`.
    pub fn suggested_file_name(today: NaiveDate) -> String {
        format!("cherish-backup-{today}.json")
    }

    /// Re-creates backup content through the regular create path.
    ///
    /// # Contract
    /// - Records get fresh identifiers and creation timestamps.
    /// - Collections are replayed oldest-first so the prepend-on-create
    ///   order reproduces the exported order.
    /// - The partner is restored only when none exists, preserving the
    ///   singleton invariant.
    pub fn restore(&self, document: &BackupDocument) -> StoreResult<RestoreSummary> {
        let mut summary = RestoreSummary::default();

        if self.partners.list(None)?.is_empty() {
            if let Some(partner) = &document.partner {
                self.partners.create(NewPartner {
                    partner_name: partner.partner_name.clone(),
                    start_date: partner.start_date,
                    photo_url: partner.photo_url.clone(),
                    theme_color: partner.theme_color.clone(),
                })?;
                summary.partner_restored = true;
            }
        }

        for memory in document.memories.iter().rev() {
            self.memories.create(NewMemory {
                category: memory.category.clone(),
                memory_date: memory.memory_date,
                location: memory.location.clone(),
                notes: memory.notes.clone(),
                photo_url: memory.photo_url.clone(),
            })?;
            summary.memories_restored += 1;
        }

        for item in document.vault_items.iter().rev() {
            self.vault_items.create(NewVaultItem {
                kind: item.kind.clone(),
                content: item.content.clone(),
            })?;
            summary.vault_items_restored += 1;
        }

        info!(
            "event=backup_restore module=service status=ok partner_restored={} memories={} vault_items={}",
            summary.partner_restored, summary.memories_restored, summary.vault_items_restored
        );
        Ok(summary)
    }

    /// Deletes every memory, vault fact and the partner profile.
    ///
    /// Deletes are sequenced per record so the bulk operation converges to
    /// empty collections under the whole-collection write contract.
    pub fn wipe_all(&self) -> StoreResult<WipeSummary> {
        let mut summary = WipeSummary::default();

        for memory in self.memories.list(None)? {
            if self.memories.delete(memory.meta.id)? {
                summary.memories_deleted += 1;
            }
        }
        for item in self.vault_items.list(None)? {
            if self.vault_items.delete(item.meta.id)? {
                summary.vault_items_deleted += 1;
            }
        }
        for partner in self.partners.list(None)? {
            if self.partners.delete(partner.meta.id)? {
                summary.partners_deleted += 1;
            }
        }

        info!(
            "event=data_wipe module=service status=ok memories={} vault_items={} partners={}",
            summary.memories_deleted, summary.vault_items_deleted, summary.partners_deleted
        );
        Ok(summary)
    }
}
