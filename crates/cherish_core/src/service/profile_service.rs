//! Partner profile use-cases.
//!
//! # Responsibility
//! - Own onboarding, settings updates and time-together phrasing.
//!
//! # Invariants
//! - At most one profile is ever created through this service.
//! - Readers use the first stored profile and ignore surplus records.

use crate::model::partner::{NewPartner, Partner, PartnerPatch};
use crate::model::record::RecordId;
use crate::query::insight::whole_months_between;
use crate::store::{CollectionStore, StoreError, StoreResult};
use chrono::NaiveDate;
use log::info;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ProfileResult<T> = Result<T, ProfileError>;

/// Profile-layer error on top of store transport errors.
#[derive(Debug)]
pub enum ProfileError {
    /// A profile already exists; onboarding runs once.
    AlreadyOnboarded,
    Store(StoreError),
}

impl Display for ProfileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyOnboarded => write!(f, "a partner profile already exists"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ProfileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AlreadyOnboarded => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ProfileError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case service for the partner profile.
pub struct ProfileService<'conn> {
    partners: CollectionStore<'conn, Partner>,
}

impl<'conn> ProfileService<'conn> {
    /// Constructs the service from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        Ok(Self {
            partners: CollectionStore::try_new(conn)?,
        })
    }

    /// Returns the active profile, or `None` before onboarding.
    pub fn current(&self) -> StoreResult<Option<Partner>> {
        Ok(self.partners.list(None)?.into_iter().next())
    }

    /// Creates the partner profile once.
    ///
    /// # Contract
    /// - Fails with [`ProfileError::AlreadyOnboarded`] when a profile
    ///   exists; the store itself stays generic.
    pub fn onboard(&self, draft: NewPartner) -> ProfileResult<Partner> {
        if self.current()?.is_some() {
            return Err(ProfileError::AlreadyOnboarded);
        }
        let partner = self.partners.create(draft)?;
        info!(
            "event=profile_onboard module=service status=ok partner_id={}",
            partner.meta.id
        );
        Ok(partner)
    }

    /// Applies a partial settings update to the stored profile.
    pub fn update_settings(&self, id: RecordId, patch: PartnerPatch) -> StoreResult<Partner> {
        self.partners.update(id, patch)
    }

    /// Whole days elapsed since the relationship start date.
    pub fn days_together(partner: &Partner, today: NaiveDate) -> i64 {
        (today - partner.start_date).num_days()
    }

    /// Human phrase for the time together, e.g. `2 years, 3 months`.
    ///
    /// Fresh relationships under a month read as day counts; a start date
    /// of today reads as `It starts today`.
    pub fn time_together(partner: &Partner, today: NaiveDate) -> String {
        let months_total = whole_months_between(partner.start_date, today).max(0);
        let years = i64::from(months_total / 12);
        let months = i64::from(months_total % 12);
        let days = Self::days_together(partner, today).max(0) % 30;

        let mut parts = Vec::new();
        if years > 0 {
            parts.push(format!("{years} year{}", plural(years)));
        }
        if months > 0 {
            parts.push(format!("{months} month{}", plural(months)));
        }
        if years == 0 && months == 0 && days > 0 {
            parts.push(format!("{days} day{}", plural(days)));
        }

        if parts.is_empty() {
            return "It starts today".to_string();
        }
        parts.join(", ")
    }
}

fn plural(count: i64) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}
