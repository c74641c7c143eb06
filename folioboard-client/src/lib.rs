//! # Folioboard Client
//!
//! The async integration layer of the dashboard. It owns everything the
//! pure engine must not: the API collaborator seam, the session context
//! wiring, the entity snapshot container, and the debounced search
//! dispatcher with last-write-wins result delivery.
//!
//! ## Module Organization
//!
//! - `api`: the `PortfolioApi` trait, its HTTP implementation, and an
//!   in-memory mock for tests and demos
//! - `config`: environment-based configuration
//! - `dispatcher`: debounced search dispatch with stale-result discard
//! - `error`: client error types
//! - `state`: the application state container (session + snapshots)
//!
//! ## Concurrency model
//!
//! All core computation stays synchronous; the only suspension points
//! are the API calls and the dispatcher's debounce timer. Entity
//! snapshots are replaced wholesale after mutations, never edited in
//! place.

pub mod api;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod state;

pub use api::{HttpApi, MockApi, PortfolioApi, ProjectFilter};
pub use config::Config;
pub use dispatcher::{SearchBackend, SearchDispatcher, SearchOutcome, SnapshotBackend};
pub use error::{ClientError, ClientResult};
pub use state::{CorpusSnapshot, DashboardState};
