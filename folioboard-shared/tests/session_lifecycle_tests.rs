/// Session lifecycle tests
///
/// Verifies the restore-on-startup and clear-on-sign-out behavior across
/// context instances sharing one store, the way an application restart
/// does.

use chrono::Utc;
use folioboard_shared::models::User;
use folioboard_shared::session::{MemorySessionStore, SessionContext};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

fn demo_user() -> User {
    User {
        id: Uuid::new_v4(),
        name: "Demo User".to_string(),
        email: "demo@example.com".to_string(),
        title: Some("Full Stack Developer".to_string()),
        bio: None,
        skills: vec!["Rust".to_string()],
        social_links: HashMap::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn restore_picks_up_persisted_session() {
    let store = Arc::new(MemorySessionStore::new());

    let mut first = SessionContext::new(Box::new(store.clone()));
    first.sign_in("token-xyz".to_string(), demo_user());

    // Simulated restart: a fresh context over the same store.
    let mut second = SessionContext::new(Box::new(store));
    assert!(!second.is_authenticated());
    assert!(second.restore());
    assert_eq!(second.auth_token(), Some("token-xyz"));
    assert_eq!(second.current_user().unwrap().name, "Demo User");
}

#[test]
fn sign_out_clears_the_store_for_later_restores() {
    let store = Arc::new(MemorySessionStore::new());

    let mut first = SessionContext::new(Box::new(store.clone()));
    first.sign_in("token-xyz".to_string(), demo_user());
    first.sign_out();

    let mut second = SessionContext::new(Box::new(store));
    assert!(!second.restore());
    assert!(second.auth_token().is_none());
}

#[test]
fn restore_with_empty_store_reports_false() {
    let mut ctx = SessionContext::new(Box::new(MemorySessionStore::new()));
    assert!(!ctx.restore());
    assert!(ctx.require_user().is_err());
}
