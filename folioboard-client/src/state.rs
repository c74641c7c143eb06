/// Application state container
///
/// Owns the three pieces the rest of the client shares: the session
/// context, the API handle, and the entity snapshots the engine reads.
/// Mutations go through the API and are followed by a full snapshot
/// refresh; nothing edits a snapshot in place, so engine calls always
/// see a consistent read-only view.

use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use uuid::Uuid;

use folioboard_engine::search::Corpus;
use folioboard_shared::models::{DashboardAnalytics, Project, Task, User};
use folioboard_shared::session::{SessionContext, SessionStore};

use crate::api::{LoginRequest, PortfolioApi, ProjectFilter, RegisterRequest, DEFAULT_PAGE_SIZE};
use crate::dispatcher::SnapshotBackend;
use crate::error::{ClientError, ClientResult};

/// One consistent snapshot of the searchable collections
#[derive(Debug, Default)]
pub struct CorpusSnapshot {
    /// Projects, newest first as fetched
    pub projects: Vec<Project>,

    /// Tasks across all fetched projects
    pub tasks: Vec<Task>,

    /// Known users
    pub users: Vec<User>,

    /// When this snapshot was fetched (None before the first refresh)
    pub fetched_at: Option<DateTime<Utc>>,
}

impl CorpusSnapshot {
    /// Borrows the snapshot as an engine corpus
    pub fn as_corpus(&self) -> Corpus<'_> {
        Corpus::new(&self.projects, &self.tasks, &self.users)
    }
}

/// Shared application state
///
/// One instance per running dashboard; cheap to share via `Arc`.
pub struct DashboardState {
    api: Arc<dyn PortfolioApi>,
    session: Mutex<SessionContext>,
    corpus: Arc<RwLock<CorpusSnapshot>>,
    analytics: Mutex<DashboardAnalytics>,
}

impl DashboardState {
    /// Creates the state container around an API handle and session store
    pub fn new(api: Arc<dyn PortfolioApi>, store: Box<dyn SessionStore>) -> Self {
        DashboardState {
            api,
            session: Mutex::new(SessionContext::new(store)),
            corpus: Arc::new(RwLock::new(CorpusSnapshot::default())),
            analytics: Mutex::new(DashboardAnalytics::default()),
        }
    }

    /// Attempts to restore a persisted session on startup
    ///
    /// Returns true if a session was restored; the API handle picks up
    /// the restored token.
    pub fn initialize(&self) -> bool {
        let mut session = self.session.lock().expect("session lock poisoned");
        let restored = session.restore();
        if restored {
            self.api
                .set_auth_token(session.auth_token().map(String::from));
        }
        restored
    }

    /// Signs in and wires the token into the API handle
    pub async fn sign_in(&self, email: &str, password: &str) -> ClientResult<User> {
        let auth = self
            .api
            .login(LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        self.api.set_auth_token(Some(auth.access_token.clone()));
        let mut session = self.session.lock().expect("session lock poisoned");
        session.sign_in(auth.access_token, auth.user.clone());
        Ok(auth.user)
    }

    /// Registers a new account and signs it in
    pub async fn register(&self, request: RegisterRequest) -> ClientResult<User> {
        let auth = self.api.register(request).await?;

        self.api.set_auth_token(Some(auth.access_token.clone()));
        let mut session = self.session.lock().expect("session lock poisoned");
        session.sign_in(auth.access_token, auth.user.clone());
        Ok(auth.user)
    }

    /// Signs out, clears the token, and drops the snapshots
    pub async fn sign_out(&self) {
        {
            let mut session = self.session.lock().expect("session lock poisoned");
            session.sign_out();
        }
        self.api.set_auth_token(None);
        *self.corpus.write().await = CorpusSnapshot::default();
        *self.analytics.lock().expect("analytics lock poisoned") = DashboardAnalytics::default();
    }

    /// The signed-in user, if any
    pub fn current_user(&self) -> Option<User> {
        self.session
            .lock()
            .expect("session lock poisoned")
            .current_user()
            .cloned()
    }

    /// Checks whether a session is active
    pub fn is_authenticated(&self) -> bool {
        self.session
            .lock()
            .expect("session lock poisoned")
            .is_authenticated()
    }

    fn require_user_id(&self) -> ClientResult<Uuid> {
        self.current_user()
            .map(|u| u.id)
            .ok_or(ClientError::Unauthorized)
    }

    /// Re-fetches every snapshot from the API
    ///
    /// Called after startup and after every mutation. Replaces the
    /// corpus wholesale so in-flight engine reads keep their old view.
    pub async fn refresh(&self) -> ClientResult<()> {
        let user_id = self.require_user_id()?;

        let projects = self
            .api
            .list_projects(&ProjectFilter::for_user(user_id))
            .await?;

        let mut tasks = Vec::new();
        for project in &projects {
            tasks.extend(self.api.list_tasks(project.id, None).await?);
        }

        let users = self.api.list_users(0, DEFAULT_PAGE_SIZE).await?;
        let analytics = self.api.dashboard_analytics().await?;

        tracing::info!(
            projects = projects.len(),
            tasks = tasks.len(),
            users = users.len(),
            "Refreshed entity snapshots"
        );

        {
            let mut snapshot = self.corpus.write().await;
            *snapshot = CorpusSnapshot {
                projects,
                tasks,
                users,
                fetched_at: Some(Utc::now()),
            };
        }
        *self.analytics.lock().expect("analytics lock poisoned") = analytics;
        Ok(())
    }

    /// The API handle, for mutations that precede a refresh
    pub fn api(&self) -> Arc<dyn PortfolioApi> {
        Arc::clone(&self.api)
    }

    /// Shared handle to the snapshot the engine searches
    pub fn corpus(&self) -> Arc<RwLock<CorpusSnapshot>> {
        Arc::clone(&self.corpus)
    }

    /// Search backend over this state's snapshot
    pub fn search_backend(&self) -> Arc<SnapshotBackend> {
        Arc::new(SnapshotBackend::new(self.corpus()))
    }

    /// The last fetched analytics snapshot
    pub fn analytics(&self) -> DashboardAnalytics {
        self.analytics
            .lock()
            .expect("analytics lock poisoned")
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_yields_empty_corpus() {
        let snapshot = CorpusSnapshot::default();
        let corpus = snapshot.as_corpus();
        assert!(corpus.projects.is_empty());
        assert!(corpus.tasks.is_empty());
        assert!(corpus.users.is_empty());
        assert!(snapshot.fetched_at.is_none());
    }
}
