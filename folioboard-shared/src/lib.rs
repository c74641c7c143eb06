//! # Folioboard Shared Library
//!
//! This crate contains the shared types used across the folioboard engine
//! and client crates.
//!
//! ## Module Organization
//!
//! - `models`: Entity models (users, projects, tasks) and analytics snapshots
//! - `session`: Explicit session context with restore/sign-out lifecycle

pub mod models;
pub mod session;

/// Current version of the folioboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
