/// Session persistence seam
///
/// The browser original kept the token and current user in local storage;
/// here the storage slot is a trait so tests and the demo binary can use
/// an in-memory store while an embedding application supplies whatever
/// persistence it has.

use std::sync::Mutex;

use super::context::Session;

/// Storage backing for a session
///
/// Implementations must be cheap to call; load happens once per restore
/// and save/clear happen on sign-in/sign-out only.
pub trait SessionStore: Send + Sync {
    /// Loads the persisted session, if any
    fn load(&self) -> Option<Session>;

    /// Persists the session
    fn save(&self, session: &Session);

    /// Removes any persisted session
    fn clear(&self);
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn load(&self) -> Option<Session> {
        (**self).load()
    }

    fn save(&self, session: &Session) {
        (**self).save(session)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// In-memory session store
///
/// Holds at most one session for the lifetime of the process. Used by
/// tests and the demo binary.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.slot.lock().expect("session store poisoned").clone()
    }

    fn save(&self, session: &Session) {
        *self.slot.lock().expect("session store poisoned") = Some(session.clone());
    }

    fn clear(&self) {
        *self.slot.lock().expect("session store poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use chrono::Utc;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn make_session() -> Session {
        Session {
            token: "token-123".to_string(),
            user: User {
                id: Uuid::new_v4(),
                name: "Demo User".to_string(),
                email: "demo@example.com".to_string(),
                title: None,
                bio: None,
                skills: Vec::new(),
                social_links: HashMap::new(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            established_at: Utc::now(),
        }
    }

    #[test]
    fn test_save_load_clear() {
        let store = MemorySessionStore::new();
        assert!(store.load().is_none());

        let session = make_session();
        store.save(&session);
        assert_eq!(store.load().unwrap().token, "token-123");

        store.clear();
        assert!(store.load().is_none());
    }
}
