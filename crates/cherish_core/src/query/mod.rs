//! Pure projections and rules over in-memory record lists.
//!
//! # Responsibility
//! - Group, filter and summarize records already loaded from the store.
//! - Evaluate the insight rule chain.
//!
//! # Invariants
//! - Everything here is pure and total; empty input yields empty output.

pub mod insight;
pub mod projections;
