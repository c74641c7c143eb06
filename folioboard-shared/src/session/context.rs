/// Session record and context
///
/// # Example
///
/// ```
/// use folioboard_shared::session::{MemorySessionStore, SessionContext};
///
/// let mut ctx = SessionContext::new(Box::new(MemorySessionStore::new()));
/// assert!(ctx.auth_token().is_none());
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::User;

use super::store::SessionStore;

/// Error type for session operations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// An operation that needs an authenticated session ran without one
    #[error("No active session")]
    NotAuthenticated,
}

/// An established session: the bearer token plus the signed-in user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token issued by the backend
    pub token: String,

    /// The signed-in user
    pub user: User,

    /// When this session was established on this client
    pub established_at: DateTime<Utc>,
}

/// Explicit session context
///
/// Owns the persistence seam and the in-memory copy of the current
/// session. One context per running application; user switching happens
/// by signing out and in again, never by a second context.
pub struct SessionContext {
    store: Box<dyn SessionStore>,
    current: Option<Session>,
}

impl SessionContext {
    /// Creates a context with no active session
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        SessionContext {
            store,
            current: None,
        }
    }

    /// Attempts to restore a persisted session
    ///
    /// Returns true if a session was restored. Called once on startup.
    pub fn restore(&mut self) -> bool {
        match self.store.load() {
            Some(session) => {
                tracing::debug!(user = %session.user.id, "Restored session");
                self.current = Some(session);
                true
            }
            None => false,
        }
    }

    /// Establishes a session from a successful login or registration
    pub fn sign_in(&mut self, token: String, user: User) {
        let session = Session {
            token,
            user,
            established_at: Utc::now(),
        };
        self.store.save(&session);
        tracing::info!(user = %session.user.id, "Signed in");
        self.current = Some(session);
    }

    /// Tears the session down and clears the backing store
    ///
    /// Safe to call without an active session.
    pub fn sign_out(&mut self) {
        if let Some(session) = self.current.take() {
            tracing::info!(user = %session.user.id, "Signed out");
        }
        self.store.clear();
    }

    /// Checks whether a session is active
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The active bearer token, if any
    pub fn auth_token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    /// The signed-in user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref().map(|s| &s.user)
    }

    /// The signed-in user, or an error for flows that require one
    pub fn require_user(&self) -> Result<&User, SessionError> {
        self.current_user().ok_or(SessionError::NotAuthenticated)
    }

    /// Replaces the stored user after a profile edit
    ///
    /// No-op when signed out.
    pub fn update_user(&mut self, user: User) {
        if let Some(session) = self.current.as_mut() {
            session.user = user;
            self.store.save(session);
        }
    }
}
