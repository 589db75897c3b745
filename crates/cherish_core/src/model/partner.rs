//! Partner profile record.
//!
//! # Responsibility
//! - Define the singleton-like profile describing the tracked relationship.
//!
//! # Invariants
//! - The store does not enforce the singleton; readers use the first record
//!   and ignore surplus. `ProfileService::onboard` refuses a second profile.

use crate::model::record::{CollectionRecord, RecordMeta};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Theme tag assigned when onboarding does not pick one explicitly.
pub const DEFAULT_THEME_COLOR: &str = "warm";

/// Profile record for the tracked relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub partner_name: String,
    /// Relationship start date; calendar date, no time component.
    pub start_date: NaiveDate,
    /// Opaque photo reference: plain URI or self-contained data URI.
    #[serde(default)]
    pub photo_url: Option<String>,
    pub theme_color: String,
}

/// Caller-supplied fields for profile creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPartner {
    pub partner_name: String,
    pub start_date: NaiveDate,
    pub photo_url: Option<String>,
    pub theme_color: String,
}

impl NewPartner {
    /// Onboarding draft with no photo and the default theme.
    pub fn new(partner_name: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            partner_name: partner_name.into(),
            start_date,
            photo_url: None,
            theme_color: DEFAULT_THEME_COLOR.to_string(),
        }
    }
}

/// Shallow settings update.
///
/// Outer `None` leaves a field untouched; for `photo_url` the inner `None`
/// clears the stored reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnerPatch {
    pub partner_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub photo_url: Option<Option<String>>,
    pub theme_color: Option<String>,
}

impl CollectionRecord for Partner {
    type Draft = NewPartner;
    type Patch = PartnerPatch;

    const COLLECTION_KEY: &'static str = "cherish_partner";

    fn assemble(meta: RecordMeta, draft: NewPartner) -> Self {
        Self {
            meta,
            partner_name: draft.partner_name,
            start_date: draft.start_date,
            photo_url: draft.photo_url,
            theme_color: draft.theme_color,
        }
    }

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn apply_patch(&mut self, patch: PartnerPatch) {
        if let Some(name) = patch.partner_name {
            self.partner_name = name;
        }
        if let Some(date) = patch.start_date {
            self.start_date = date;
        }
        if let Some(photo) = patch.photo_url {
            self.photo_url = photo;
        }
        if let Some(theme) = patch.theme_color {
            self.theme_color = theme;
        }
    }

    fn sort_text(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.meta.id.to_string()),
            "created_at" => Some(self.meta.created_at.to_rfc3339()),
            "partner_name" => Some(self.partner_name.clone()),
            "start_date" => Some(self.start_date.to_string()),
            "photo_url" => self.photo_url.clone(),
            "theme_color" => Some(self.theme_color.clone()),
            _ => None,
        }
    }
}
