/// The backend API collaborator
///
/// The dashboard consumes the backend as a black box behind the
/// [`PortfolioApi`] trait. Two implementations exist:
///
/// - [`HttpApi`]: the real reqwest-backed client
/// - [`MockApi`]: an in-memory implementation for tests and demos
///
/// The engine never talks to this trait; the state container fetches
/// snapshots here and hands borrowed slices down.
///
/// # Example
///
/// ```no_run
/// use folioboard_client::api::{LoginRequest, MockApi, PortfolioApi};
///
/// # async fn example() -> folioboard_client::ClientResult<()> {
/// let api = MockApi::with_demo_data();
/// let auth = api
///     .login(LoginRequest {
///         email: "john.doe@demo.com".to_string(),
///         password: "demo123".to_string(),
///     })
///     .await?;
/// println!("signed in as {}", auth.user.name);
/// # Ok(())
/// # }
/// ```

pub mod http;
pub mod mock;

pub use http::HttpApi;
pub use mock::MockApi;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

use folioboard_shared::models::{
    CreateProject, CreateTask, DashboardAnalytics, Project, ProjectStatus, ProjectType, Task,
    TaskStatus, UpdateProject, UpdateTask, UpdateUser, User,
};

use crate::error::ClientResult;

/// Default page size for list fetches
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Filter for project list fetches
#[derive(Debug, Clone, Serialize)]
pub struct ProjectFilter {
    /// Restrict to one owner (defaults to the signed-in user backend-side)
    pub user_id: Option<Uuid>,

    /// Restrict to one status
    pub status: Option<ProjectStatus>,

    /// Restrict to one project type
    pub project_type: Option<ProjectType>,

    /// Number of projects to skip
    pub skip: usize,

    /// Maximum number of projects to return
    pub limit: usize,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        ProjectFilter {
            user_id: None,
            status: None,
            project_type: None,
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProjectFilter {
    /// Filter for one owner's projects with default paging
    pub fn for_user(user_id: Uuid) -> Self {
        ProjectFilter {
            user_id: Some(user_id),
            ..Default::default()
        }
    }
}

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

/// Registration request payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    /// Professional title
    pub title: Option<String>,

    /// Short biography
    pub bio: Option<String>,

    /// Skills in insertion order
    #[serde(default)]
    pub skills: Vec<String>,

    /// Social links, platform name to URL
    #[serde(default)]
    pub social_links: HashMap<String, String>,
}

/// Successful login/registration response
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer token
    pub access_token: String,

    /// Token type, always "bearer"
    pub token_type: String,

    /// The signed-in user
    pub user: User,
}

/// The backend API contract
///
/// Implementations hold the active bearer token themselves so callers
/// (the state container) can wire the session context in once via
/// [`PortfolioApi::set_auth_token`].
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// Replaces the bearer token attached to subsequent requests
    fn set_auth_token(&self, token: Option<String>);

    /// Checks backend availability
    async fn health_check(&self) -> ClientResult<()>;

    /// Registers a new account and signs it in
    async fn register(&self, request: RegisterRequest) -> ClientResult<AuthResponse>;

    /// Signs in with email and password
    async fn login(&self, request: LoginRequest) -> ClientResult<AuthResponse>;

    /// Fetches the signed-in user
    async fn current_user(&self) -> ClientResult<User>;

    /// Lists users with pagination
    async fn list_users(&self, skip: usize, limit: usize) -> ClientResult<Vec<User>>;

    /// Fetches one user
    async fn get_user(&self, user_id: Uuid) -> ClientResult<User>;

    /// Applies a profile edit
    async fn update_user(&self, user_id: Uuid, update: UpdateUser) -> ClientResult<User>;

    /// Creates a project owned by the signed-in user
    async fn create_project(&self, input: CreateProject) -> ClientResult<Project>;

    /// Lists projects matching the filter, newest first
    async fn list_projects(&self, filter: &ProjectFilter) -> ClientResult<Vec<Project>>;

    /// Fetches one project
    async fn get_project(&self, project_id: Uuid) -> ClientResult<Project>;

    /// Applies a project edit
    async fn update_project(
        &self,
        project_id: Uuid,
        update: UpdateProject,
    ) -> ClientResult<Project>;

    /// Deletes a project and its tasks
    async fn delete_project(&self, project_id: Uuid) -> ClientResult<()>;

    /// Creates a task under a project
    async fn create_task(&self, project_id: Uuid, input: CreateTask) -> ClientResult<Task>;

    /// Lists a project's tasks, optionally restricted to one status
    async fn list_tasks(
        &self,
        project_id: Uuid,
        status: Option<TaskStatus>,
    ) -> ClientResult<Vec<Task>>;

    /// Applies a task edit
    async fn update_task(&self, task_id: Uuid, update: UpdateTask) -> ClientResult<Task>;

    /// Deletes a task
    async fn delete_task(&self, task_id: Uuid) -> ClientResult<()>;

    /// Fetches the pre-aggregated analytics snapshot for the signed-in user
    async fn dashboard_analytics(&self) -> ClientResult<DashboardAnalytics>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_filter_defaults() {
        let filter = ProjectFilter::default();
        assert!(filter.user_id.is_none());
        assert_eq!(filter.skip, 0);
        assert_eq!(filter.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_register_request_validation() {
        let request = RegisterRequest {
            name: "Demo".to_string(),
            email: "demo@example.com".to_string(),
            password: "demo123".to_string(),
            title: None,
            bio: None,
            skills: Vec::new(),
            social_links: HashMap::new(),
        };
        assert!(request.validate().is_ok());

        let short_password = RegisterRequest {
            password: "abc".to_string(),
            ..request
        };
        assert!(short_password.validate().is_err());
    }
}
