//! Insight rule chain.
//!
//! # Responsibility
//! - Produce at most one nudge from the memory history and start date.
//!
//! # Invariants
//! - Rules evaluate in strict priority order; the first match wins.
//! - The chain is pure and total, including over an empty memory list.
//! - Thresholds (7 days, 14 days, 3 months, 30 days) are observable
//!   application behavior and must not drift.

use crate::model::memory::{Memory, MemoryCategory};
use chrono::{Datelike, NaiveDate};

const ANNIVERSARY_WINDOW_DAYS: i64 = 7;
const DATE_STALE_AFTER_DAYS: i64 = 14;
const GIFT_STALE_AFTER_MONTHS: i32 = 3;
const EMOTION_STALE_AFTER_DAYS: i64 = 30;

/// Single suggestion produced by [`suggest_insight`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insight {
    /// Anniversary within the next week.
    Milestone { message: String },
    /// No recent date-category memory.
    DateSuggestion,
    /// No recent gift-category memory.
    GiftSuggestion,
    /// No recent emotion-category memory.
    EmotionalCheck,
}

/// Evaluates the rule chain over a most-recent-first memory list.
///
/// Returns `None` when every rule finds the history fresh enough.
pub fn suggest_insight(
    memories: &[Memory],
    start_date: NaiveDate,
    today: NaiveDate,
) -> Option<Insight> {
    let days_until = (next_anniversary(start_date, today) - today).num_days();
    if (1..=ANNIVERSARY_WINDOW_DAYS).contains(&days_until) {
        let plural = if days_until > 1 { "s" } else { "" };
        return Some(Insight::Milestone {
            message: format!(
                "Your anniversary is in {days_until} day{plural}. Something special planned?"
            ),
        });
    }

    match latest_of(memories, &MemoryCategory::Date) {
        Some(date) if (today - date).num_days() <= DATE_STALE_AFTER_DAYS => {}
        _ => return Some(Insight::DateSuggestion),
    }

    match latest_of(memories, &MemoryCategory::Gift) {
        Some(date) if whole_months_between(date, today) < GIFT_STALE_AFTER_MONTHS => {}
        _ => return Some(Insight::GiftSuggestion),
    }

    match latest_of(memories, &MemoryCategory::Emotion) {
        Some(date) if (today - date).num_days() <= EMOTION_STALE_AFTER_DAYS => {}
        _ => return Some(Insight::EmotionalCheck),
    }

    None
}

/// Next anniversary of `start_date` falling on or after `today`.
///
/// A Feb 29 anniversary clamps to Feb 28 in non-leap years.
pub fn next_anniversary(start_date: NaiveDate, today: NaiveDate) -> NaiveDate {
    let candidate = anniversary_in_year(start_date, today.year());
    if candidate >= today {
        candidate
    } else {
        anniversary_in_year(start_date, today.year() + 1)
    }
}

/// Whole calendar months elapsed from `from` to `to`.
///
/// The count is decremented when `to`'s day-of-month has not yet reached
/// `from`'s; negative when `to` precedes `from`.
pub fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months = (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    if to.day() < from.day() {
        months -= 1;
    }
    months
}

fn latest_of(memories: &[Memory], category: &MemoryCategory) -> Option<NaiveDate> {
    memories
        .iter()
        .find(|memory| memory.category == *category)
        .map(|memory| memory.memory_date)
}

fn anniversary_in_year(start_date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, start_date.month(), start_date.day())
        // Only Feb 29 can be invalid in the target year; clamp to Feb 28.
        .or_else(|| NaiveDate::from_ymd_opt(year, start_date.month(), start_date.day() - 1))
        .unwrap_or(start_date)
}
