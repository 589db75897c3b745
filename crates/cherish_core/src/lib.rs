//! Core domain logic for Cherish, a local relationship-memory tracker.
//! This crate is the single source of truth for storage and insight
//! contracts; presentation layers stay outside.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod spark;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::memory::{Memory, MemoryCategory, MemoryPatch, NewMemory};
pub use model::partner::{NewPartner, Partner, PartnerPatch, DEFAULT_THEME_COLOR};
pub use model::record::{CollectionRecord, RecordId, RecordMeta};
pub use model::vault::{NewVaultItem, VaultItem, VaultItemPatch, VaultKind};
pub use query::insight::{next_anniversary, suggest_insight, whole_months_between, Insight};
pub use query::projections::{
    filter_by_date, filter_by_kind_and_text, group_by_date, most_recent_by_category,
};
pub use service::backup_service::{BackupDocument, BackupService, RestoreSummary, WipeSummary};
pub use service::memory_service::MemoryService;
pub use service::profile_service::{ProfileError, ProfileResult, ProfileService};
pub use service::vault_service::{VaultError, VaultResult, VaultService};
pub use store::{CollectionStore, SortKey, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
