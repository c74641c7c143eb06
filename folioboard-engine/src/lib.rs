//! # Folioboard Engine
//!
//! The logic-bearing core of the dashboard: pure, synchronous functions
//! over in-memory entity snapshots. Nothing in this crate performs IO,
//! holds locks across calls, or mutates its inputs; callers hand in
//! borrowed snapshots and receive owned presentation records.
//!
//! ## Module Organization
//!
//! - `aggregate`: grouped counts, percentages, completion rates
//! - `recency`: trailing time-window filtering
//! - `search`: multi-entity text search with filters and highlighting
//! - `metrics`: display-ready metric and distribution records
//!
//! ## Degradation policy
//!
//! Data-shape problems never produce errors here: an empty corpus yields
//! zero-valued outputs, unrecognized enum values land in the fallback
//! bucket, and entities with missing timestamps drop out of recency
//! computations.

pub mod aggregate;
pub mod metrics;
pub mod recency;
pub mod search;

pub use aggregate::{aggregate_by, completion_rate, percentage};
pub use recency::{recent_items, TimeRange, DEFAULT_ACTIVITY_WINDOW_DAYS};
pub use search::{search, Corpus, SearchFilters, SearchResults, SearchScope, StatusFilter};
