//! Vault fact record.
//!
//! # Responsibility
//! - Define one tagged free-text fact about the partner.
//! - Keep the kind enumeration closed while tolerating unknown tokens.
//!
//! # Invariants
//! - Unknown kind tokens survive a storage round-trip unchanged.

use crate::model::record::{CollectionRecord, RecordMeta};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Fixed fact-kind enumeration plus an explicit unknown-token variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VaultKind {
    Love,
    Dislike,
    Comfort,
    Promise,
    Unknown(String),
}

impl VaultKind {
    /// The fixed enumeration, in the order the application presents it.
    pub const KNOWN: [VaultKind; 4] = [
        VaultKind::Love,
        VaultKind::Dislike,
        VaultKind::Comfort,
        VaultKind::Promise,
    ];

    /// Persisted lowercase token for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Love => "love",
            Self::Dislike => "dislike",
            Self::Comfort => "comfort",
            Self::Promise => "promise",
            Self::Unknown(raw) => raw,
        }
    }

    /// Parses a persisted token; unrecognized tokens become `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value {
            "love" => Self::Love,
            "dislike" => Self::Dislike,
            "comfort" => Self::Comfort,
            "promise" => Self::Promise,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Whether readers can render this kind.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl Display for VaultKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for VaultKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VaultKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// One tagged free-text fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultItem {
    #[serde(flatten)]
    pub meta: RecordMeta,
    /// Serialized as `type` to match the persisted layout.
    #[serde(rename = "type")]
    pub kind: VaultKind,
    pub content: String,
}

/// Caller-supplied fields for an inline vault add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVaultItem {
    pub kind: VaultKind,
    pub content: String,
}

/// Shallow update for a vault item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaultItemPatch {
    pub kind: Option<VaultKind>,
    pub content: Option<String>,
}

impl CollectionRecord for VaultItem {
    type Draft = NewVaultItem;
    type Patch = VaultItemPatch;

    const COLLECTION_KEY: &'static str = "cherish_vault_items";

    fn assemble(meta: RecordMeta, draft: NewVaultItem) -> Self {
        Self {
            meta,
            kind: draft.kind,
            content: draft.content,
        }
    }

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn apply_patch(&mut self, patch: VaultItemPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }

    fn sort_text(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.meta.id.to_string()),
            "created_at" => Some(self.meta.created_at.to_rfc3339()),
            "type" => Some(self.kind.as_str().to_string()),
            "content" => Some(self.content.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::VaultKind;

    #[test]
    fn parse_round_trips_known_tokens() {
        for kind in VaultKind::KNOWN {
            assert_eq!(VaultKind::parse(kind.as_str()), kind);
            assert!(kind.is_known());
        }
    }

    #[test]
    fn unknown_token_is_kept_verbatim() {
        let kind = VaultKind::parse("secret");
        assert_eq!(kind, VaultKind::Unknown("secret".to_string()));
        assert!(!kind.is_known());
    }
}
