//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep presentation callers decoupled from persistence details.

pub mod backup_service;
pub mod memory_service;
pub mod profile_service;
pub mod vault_service;
