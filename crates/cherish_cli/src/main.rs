//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cherish_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("cherish_core version={}", cherish_core::core_version());
    match cherish_core::db::open_db_in_memory() {
        Ok(_) => println!("cherish_core storage=ready"),
        Err(err) => println!("cherish_core storage=error detail={err}"),
    }
}
