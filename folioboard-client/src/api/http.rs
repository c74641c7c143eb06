/// HTTP implementation of the backend API
///
/// Thin request/response plumbing over reqwest. Every call attaches the
/// bearer token (when one is set), decodes the JSON body, and maps
/// non-2xx statuses through [`ClientError::from_status`], so a 401
/// surfaces as [`ClientError::Unauthorized`] everywhere.
///
/// # Example
///
/// ```no_run
/// use folioboard_client::api::{HttpApi, PortfolioApi};
/// use folioboard_client::config::Config;
///
/// # async fn example() -> anyhow::Result<()> {
/// let api = HttpApi::new(&Config::from_env()?)?;
/// api.health_check().await?;
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::sync::RwLock;
use std::time::Duration;
use uuid::Uuid;
use validator::Validate;

use folioboard_shared::models::{
    CreateProject, CreateTask, DashboardAnalytics, Project, Task, TaskStatus, UpdateProject,
    UpdateTask, UpdateUser, User,
};

use crate::config::Config;
use crate::error::{ApiErrorBody, ClientError, ClientResult};

use super::{AuthResponse, LoginRequest, PortfolioApi, ProjectFilter, RegisterRequest};

/// reqwest-backed API client
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl HttpApi {
    /// Builds a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()?;

        Ok(HttpApi {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.token.read().expect("token lock poisoned").clone();
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.json::<ApiErrorBody>().await.ok();
        Err(ClientError::from_status(status.as_u16(), body))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.authorize(self.client.get(self.url(path))).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .authorize(self.client.post(self.url(path)))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn put_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .authorize(self.client.put(self.url(path)))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_path(&self, path: &str) -> ClientResult<()> {
        let response = self
            .authorize(self.client.delete(self.url(path)))
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.json::<ApiErrorBody>().await.ok();
        Err(ClientError::from_status(status.as_u16(), body))
    }
}

#[async_trait]
impl PortfolioApi for HttpApi {
    fn set_auth_token(&self, token: Option<String>) {
        *self.token.write().expect("token lock poisoned") = token;
    }

    async fn health_check(&self) -> ClientResult<()> {
        let _: serde_json::Value = self.get_json("/api/health").await?;
        Ok(())
    }

    async fn register(&self, request: RegisterRequest) -> ClientResult<AuthResponse> {
        request.validate()?;
        self.post_json("/api/auth/register", &request).await
    }

    async fn login(&self, request: LoginRequest) -> ClientResult<AuthResponse> {
        self.post_json("/api/auth/login", &request).await
    }

    async fn current_user(&self) -> ClientResult<User> {
        self.get_json("/api/auth/me").await
    }

    async fn list_users(&self, skip: usize, limit: usize) -> ClientResult<Vec<User>> {
        let response = self
            .authorize(self.client.get(self.url("/api/users")))
            .query(&[("skip", skip), ("limit", limit)])
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn get_user(&self, user_id: Uuid) -> ClientResult<User> {
        self.get_json(&format!("/api/users/{}", user_id)).await
    }

    async fn update_user(&self, user_id: Uuid, update: UpdateUser) -> ClientResult<User> {
        update.validate()?;
        self.put_json(&format!("/api/users/{}", user_id), &update).await
    }

    async fn create_project(&self, input: CreateProject) -> ClientResult<Project> {
        input.validate()?;
        self.post_json("/api/projects", &input).await
    }

    async fn list_projects(&self, filter: &ProjectFilter) -> ClientResult<Vec<Project>> {
        let mut query: Vec<(&str, String)> = vec![
            ("skip", filter.skip.to_string()),
            ("limit", filter.limit.to_string()),
        ];
        if let Some(user_id) = filter.user_id {
            query.push(("user_id", user_id.to_string()));
        }
        if let Some(status) = filter.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(project_type) = filter.project_type {
            query.push(("project_type", project_type.as_str().to_string()));
        }

        let response = self
            .authorize(self.client.get(self.url("/api/projects")))
            .query(&query)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn get_project(&self, project_id: Uuid) -> ClientResult<Project> {
        self.get_json(&format!("/api/projects/{}", project_id)).await
    }

    async fn update_project(
        &self,
        project_id: Uuid,
        update: UpdateProject,
    ) -> ClientResult<Project> {
        update.validate()?;
        self.put_json(&format!("/api/projects/{}", project_id), &update)
            .await
    }

    async fn delete_project(&self, project_id: Uuid) -> ClientResult<()> {
        self.delete_path(&format!("/api/projects/{}", project_id)).await
    }

    async fn create_task(&self, project_id: Uuid, input: CreateTask) -> ClientResult<Task> {
        input.validate()?;
        self.post_json(&format!("/api/projects/{}/tasks", project_id), &input)
            .await
    }

    async fn list_tasks(
        &self,
        project_id: Uuid,
        status: Option<TaskStatus>,
    ) -> ClientResult<Vec<Task>> {
        let mut request = self
            .authorize(self.client.get(self.url(&format!("/api/projects/{}/tasks", project_id))));
        if let Some(status) = status {
            request = request.query(&[("status", status.as_str())]);
        }
        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn update_task(&self, task_id: Uuid, update: UpdateTask) -> ClientResult<Task> {
        update.validate()?;
        self.put_json(&format!("/api/tasks/{}", task_id), &update).await
    }

    async fn delete_task(&self, task_id: Uuid) -> ClientResult<()> {
        self.delete_path(&format!("/api/tasks/{}", task_id)).await
    }

    async fn dashboard_analytics(&self) -> ClientResult<DashboardAnalytics> {
        self.get_json("/api/analytics/dashboard").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_api(base_url: &str) -> HttpApi {
        let mut config = Config::default();
        config.api.base_url = base_url.to_string();
        HttpApi::new(&config).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = make_api("http://localhost:8001/");
        assert_eq!(api.url("/api/health"), "http://localhost:8001/api/health");
    }

    #[test]
    fn test_token_replacement() {
        let api = make_api("http://localhost:8001");
        api.set_auth_token(Some("abc".to_string()));
        assert_eq!(api.token.read().unwrap().as_deref(), Some("abc"));
        api.set_auth_token(None);
        assert!(api.token.read().unwrap().is_none());
    }
}
