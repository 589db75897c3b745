//! Domain model for the three persisted record kinds.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one closed, typed shape per record kind instead of dynamic maps.
//!
//! # Invariants
//! - Every record carries store-assigned [`record::RecordMeta`].
//! - Category/type enumerations tolerate unknown persisted tokens via an
//!   explicit `Unknown` variant; readers branch exhaustively.

pub mod memory;
pub mod partner;
pub mod record;
pub mod vault;
