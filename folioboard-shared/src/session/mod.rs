/// Session context for the dashboard
///
/// The current user and auth token live in an explicit [`SessionContext`]
/// that is constructed once at application start and threaded through the
/// client layer, instead of module-level globals.
///
/// # Lifecycle
///
/// - **restore**: on load, attempt to restore a persisted session
/// - **sign_in**: store the token and user returned by the login call
/// - **sign_out**: clear both the context and the backing store
///
/// # Modules
///
/// - [`store`]: the persistence seam ([`SessionStore`]) and the in-memory
///   implementation
/// - [`context`]: the [`Session`] record and [`SessionContext`]
///
/// # Example
///
/// ```
/// use folioboard_shared::session::{MemorySessionStore, SessionContext};
///
/// let mut ctx = SessionContext::new(Box::new(MemorySessionStore::new()));
/// ctx.restore();
/// assert!(!ctx.is_authenticated());
/// ```

pub mod context;
pub mod store;

pub use context::{Session, SessionContext, SessionError};
pub use store::{MemorySessionStore, SessionStore};
