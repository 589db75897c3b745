//! Memory event record.
//!
//! # Responsibility
//! - Define one logged relationship event with category and occurrence date.
//! - Keep the category enumeration closed while tolerating unknown tokens.
//!
//! # Invariants
//! - `memory_date` is a calendar date without a time component.
//! - Unknown category tokens survive a storage round-trip unchanged.

use crate::model::record::{CollectionRecord, RecordMeta};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Fixed category enumeration plus an explicit unknown-token variant.
///
/// Readers treat `Unknown` as unrenderable but never erase it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MemoryCategory {
    Dining,
    Gift,
    Date,
    Media,
    Emotion,
    Conflict,
    Unknown(String),
}

impl MemoryCategory {
    /// The fixed enumeration, in the order the application presents it.
    pub const KNOWN: [MemoryCategory; 6] = [
        MemoryCategory::Dining,
        MemoryCategory::Gift,
        MemoryCategory::Date,
        MemoryCategory::Media,
        MemoryCategory::Emotion,
        MemoryCategory::Conflict,
    ];

    /// Persisted lowercase token for this category.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dining => "dining",
            Self::Gift => "gift",
            Self::Date => "date",
            Self::Media => "media",
            Self::Emotion => "emotion",
            Self::Conflict => "conflict",
            Self::Unknown(raw) => raw,
        }
    }

    /// Parses a persisted token; unrecognized tokens become `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value {
            "dining" => Self::Dining,
            "gift" => Self::Gift,
            "date" => Self::Date,
            "media" => Self::Media,
            "emotion" => Self::Emotion,
            "conflict" => Self::Conflict,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Whether readers can render this category.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl Display for MemoryCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MemoryCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MemoryCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// One logged relationship event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub category: MemoryCategory,
    /// Occurrence date; distinct from the store-assigned creation timestamp.
    pub memory_date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Caller-supplied fields from the quick-log flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMemory {
    pub category: MemoryCategory,
    pub memory_date: NaiveDate,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
}

/// Shallow update for a memory.
///
/// Outer `None` leaves a field untouched; inner `None` clears an optional
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPatch {
    pub category: Option<MemoryCategory>,
    pub memory_date: Option<NaiveDate>,
    pub location: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub photo_url: Option<Option<String>>,
}

impl CollectionRecord for Memory {
    type Draft = NewMemory;
    type Patch = MemoryPatch;

    const COLLECTION_KEY: &'static str = "cherish_memories";

    fn assemble(meta: RecordMeta, draft: NewMemory) -> Self {
        Self {
            meta,
            category: draft.category,
            memory_date: draft.memory_date,
            location: draft.location,
            notes: draft.notes,
            photo_url: draft.photo_url,
        }
    }

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn apply_patch(&mut self, patch: MemoryPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.memory_date {
            self.memory_date = date;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(photo) = patch.photo_url {
            self.photo_url = photo;
        }
    }

    fn sort_text(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.meta.id.to_string()),
            "created_at" => Some(self.meta.created_at.to_rfc3339()),
            "category" => Some(self.category.as_str().to_string()),
            "memory_date" => Some(self.memory_date.to_string()),
            "location" => self.location.clone(),
            "notes" => self.notes.clone(),
            "photo_url" => self.photo_url.clone(),
            _ => None,
        }
    }
}
