/// In-memory mock of the backend API
///
/// Implements the full [`PortfolioApi`] contract against process-local
/// collections, mirroring the backend's observable behavior: duplicate
/// email rejection, owner checks on projects, newest-first list
/// ordering, the completed_at transition on tasks, and the analytics
/// aggregation. Used by tests and the demo binary.
///
/// # Demo data
///
/// [`MockApi::with_demo_data`] seeds the three well-known demo accounts,
/// all with password `demo123`.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use uuid::Uuid;
use validator::Validate;

use folioboard_engine::aggregate::percentage;
use folioboard_shared::models::{
    CreateProject, CreateTask, DashboardAnalytics, Project, ProjectTotals, Task, TaskStatus,
    TaskTotals, UpdateProject, UpdateTask, UpdateUser, User,
};

use crate::error::{ClientError, ClientResult};

use super::{AuthResponse, LoginRequest, PortfolioApi, ProjectFilter, RegisterRequest};

#[derive(Default)]
struct MockState {
    users: Vec<User>,
    projects: Vec<Project>,
    tasks: Vec<Task>,
    /// Plaintext passwords by normalized email (mock only)
    passwords: HashMap<String, String>,
    /// Issued tokens to user ids
    sessions: HashMap<String, Uuid>,
}

/// In-memory API implementation
#[derive(Default)]
pub struct MockApi {
    state: Mutex<MockState>,
    token: Mutex<Option<String>>,
    token_counter: AtomicU64,
}

impl MockApi {
    /// Creates an empty mock backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock backend seeded with the demo accounts
    pub fn with_demo_data() -> Self {
        let api = Self::new();
        {
            let mut state = api.state.lock().expect("mock state poisoned");
            let demo_users = [
                (
                    "John Doe",
                    "john.doe@demo.com",
                    "Full Stack Developer",
                    "Passionate developer with 5+ years of experience in web development",
                    vec!["JavaScript", "Python", "React", "FastAPI", "MongoDB"],
                ),
                (
                    "Sarah Smith",
                    "sarah.smith@demo.com",
                    "UX/UI Designer",
                    "Creative designer focused on user-centered design and digital experiences",
                    vec!["Figma", "Adobe Creative Suite", "Prototyping", "User Research"],
                ),
                (
                    "Mike Johnson",
                    "mike.johnson@demo.com",
                    "Project Manager",
                    "Experienced project manager specializing in agile methodologies and team leadership",
                    vec!["Scrum", "Agile", "Jira", "Team Leadership", "Risk Management"],
                ),
            ];

            for (name, email, title, bio, skills) in demo_users {
                let now = Utc::now();
                state.users.push(User {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    email: email.to_string(),
                    title: Some(title.to_string()),
                    bio: Some(bio.to_string()),
                    skills: skills.into_iter().map(String::from).collect(),
                    social_links: HashMap::new(),
                    created_at: now,
                    updated_at: now,
                });
                state
                    .passwords
                    .insert(email.to_string(), "demo123".to_string());
            }
        }
        api
    }

    fn issue_token(&self, state: &mut MockState, user_id: Uuid) -> String {
        let n = self.token_counter.fetch_add(1, Ordering::SeqCst) + 1;
        let token = format!("mock-token-{}", n);
        state.sessions.insert(token.clone(), user_id);
        token
    }

    fn session_user_id(&self, state: &MockState) -> ClientResult<Uuid> {
        let token = self.token.lock().expect("token lock poisoned").clone();
        token
            .and_then(|t| state.sessions.get(&t).copied())
            .ok_or(ClientError::Unauthorized)
    }

    fn forbidden() -> ClientError {
        ClientError::Api {
            status: 403,
            message: "Access denied".to_string(),
        }
    }
}

#[async_trait]
impl PortfolioApi for MockApi {
    fn set_auth_token(&self, token: Option<String>) {
        *self.token.lock().expect("token lock poisoned") = token;
    }

    async fn health_check(&self) -> ClientResult<()> {
        Ok(())
    }

    async fn register(&self, request: RegisterRequest) -> ClientResult<AuthResponse> {
        request.validate()?;
        let mut state = self.state.lock().expect("mock state poisoned");

        let normalized = request.email.trim().to_lowercase();
        if state
            .users
            .iter()
            .any(|u| u.normalized_email() == normalized)
        {
            return Err(ClientError::Api {
                status: 400,
                message: "Email already registered".to_string(),
            });
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            title: request.title,
            bio: request.bio,
            skills: request.skills,
            social_links: request.social_links,
            created_at: now,
            updated_at: now,
        };
        state.users.push(user.clone());
        state.passwords.insert(normalized, request.password);

        let access_token = self.issue_token(&mut state, user.id);
        Ok(AuthResponse {
            access_token,
            token_type: "bearer".to_string(),
            user,
        })
    }

    async fn login(&self, request: LoginRequest) -> ClientResult<AuthResponse> {
        let mut state = self.state.lock().expect("mock state poisoned");

        let normalized = request.email.trim().to_lowercase();
        let user = state
            .users
            .iter()
            .find(|u| u.normalized_email() == normalized)
            .cloned();

        let password_ok = state
            .passwords
            .get(&normalized)
            .is_some_and(|stored| *stored == request.password);

        match (user, password_ok) {
            (Some(user), true) => {
                let access_token = self.issue_token(&mut state, user.id);
                Ok(AuthResponse {
                    access_token,
                    token_type: "bearer".to_string(),
                    user,
                })
            }
            _ => Err(ClientError::Unauthorized),
        }
    }

    async fn current_user(&self) -> ClientResult<User> {
        let state = self.state.lock().expect("mock state poisoned");
        let user_id = self.session_user_id(&state)?;
        state
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or(ClientError::Unauthorized)
    }

    async fn list_users(&self, skip: usize, limit: usize) -> ClientResult<Vec<User>> {
        let state = self.state.lock().expect("mock state poisoned");
        Ok(state.users.iter().skip(skip).take(limit).cloned().collect())
    }

    async fn get_user(&self, user_id: Uuid) -> ClientResult<User> {
        let state = self.state.lock().expect("mock state poisoned");
        state
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound("User not found".to_string()))
    }

    async fn update_user(&self, user_id: Uuid, update: UpdateUser) -> ClientResult<User> {
        update.validate()?;
        let mut state = self.state.lock().expect("mock state poisoned");
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| ClientError::NotFound("User not found".to_string()))?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(title) = update.title {
            user.title = title;
        }
        if let Some(bio) = update.bio {
            user.bio = bio;
        }
        if let Some(skills) = update.skills {
            user.skills = skills;
        }
        if let Some(social_links) = update.social_links {
            user.social_links = social_links;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn create_project(&self, input: CreateProject) -> ClientResult<Project> {
        input.validate()?;
        let mut state = self.state.lock().expect("mock state poisoned");
        let user_id = self.session_user_id(&state)?;

        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            user_id,
            title: input.title,
            description: input.description,
            technologies: input.technologies,
            status: input.status,
            start_date: input.start_date,
            end_date: input.end_date,
            project_type: input.project_type,
            priority: input.priority,
            tags: input.tags,
            files: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        state.projects.push(project.clone());
        Ok(project)
    }

    async fn list_projects(&self, filter: &ProjectFilter) -> ClientResult<Vec<Project>> {
        let state = self.state.lock().expect("mock state poisoned");
        let owner = match filter.user_id {
            Some(id) => id,
            None => self.session_user_id(&state)?,
        };

        let mut projects: Vec<Project> = state
            .projects
            .iter()
            .filter(|p| p.user_id == owner)
            .filter(|p| filter.status.map_or(true, |s| p.status == s))
            .filter(|p| filter.project_type.map_or(true, |t| p.project_type == t))
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(projects
            .into_iter()
            .skip(filter.skip)
            .take(filter.limit)
            .collect())
    }

    async fn get_project(&self, project_id: Uuid) -> ClientResult<Project> {
        let state = self.state.lock().expect("mock state poisoned");
        let user_id = self.session_user_id(&state)?;
        let project = state
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound("Project not found".to_string()))?;

        if project.user_id != user_id {
            return Err(Self::forbidden());
        }
        Ok(project)
    }

    async fn update_project(
        &self,
        project_id: Uuid,
        update: UpdateProject,
    ) -> ClientResult<Project> {
        update.validate()?;
        let mut state = self.state.lock().expect("mock state poisoned");
        let user_id = self.session_user_id(&state)?;
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| ClientError::NotFound("Project not found".to_string()))?;

        if project.user_id != user_id {
            return Err(Self::forbidden());
        }

        if let Some(title) = update.title {
            project.title = title;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        if let Some(technologies) = update.technologies {
            project.technologies = technologies;
        }
        if let Some(status) = update.status {
            project.status = status;
        }
        if let Some(start_date) = update.start_date {
            project.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            project.end_date = end_date;
        }
        if let Some(project_type) = update.project_type {
            project.project_type = project_type;
        }
        if let Some(priority) = update.priority {
            project.priority = priority;
        }
        if let Some(tags) = update.tags {
            project.tags = tags;
        }
        project.updated_at = Utc::now();

        Ok(project.clone())
    }

    async fn delete_project(&self, project_id: Uuid) -> ClientResult<()> {
        let mut state = self.state.lock().expect("mock state poisoned");
        let user_id = self.session_user_id(&state)?;
        let project = state
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| ClientError::NotFound("Project not found".to_string()))?;

        if project.user_id != user_id {
            return Err(Self::forbidden());
        }

        state.tasks.retain(|t| t.project_id != project_id);
        state.projects.retain(|p| p.id != project_id);
        Ok(())
    }

    async fn create_task(&self, project_id: Uuid, input: CreateTask) -> ClientResult<Task> {
        input.validate()?;
        let mut state = self.state.lock().expect("mock state poisoned");
        if !state.projects.iter().any(|p| p.id == project_id) {
            return Err(ClientError::NotFound("Project not found".to_string()));
        }

        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            project_id,
            title: input.title,
            description: input.description,
            status: input.status,
            priority: input.priority,
            due_date: input.due_date,
            estimated_hours: input.estimated_hours,
            completed_at: None,
            created_at: now,
            updated_at: now,
        };
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn list_tasks(
        &self,
        project_id: Uuid,
        status: Option<TaskStatus>,
    ) -> ClientResult<Vec<Task>> {
        let state = self.state.lock().expect("mock state poisoned");
        if !state.projects.iter().any(|p| p.id == project_id) {
            return Err(ClientError::NotFound("Project not found".to_string()));
        }

        let mut tasks: Vec<Task> = state
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .filter(|t| status.map_or(true, |s| t.status == s))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn update_task(&self, task_id: Uuid, update: UpdateTask) -> ClientResult<Task> {
        update.validate()?;
        let mut state = self.state.lock().expect("mock state poisoned");
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| ClientError::NotFound("Task not found".to_string()))?;

        if let Some(title) = update.title {
            task.title = title;
        }
        if let Some(description) = update.description {
            task.description = description;
        }
        if let Some(status) = update.status {
            // completed_at tracks entry into and out of the completed status
            if status == TaskStatus::Completed && task.status != TaskStatus::Completed {
                task.completed_at = Some(Utc::now());
            } else if status != TaskStatus::Completed {
                task.completed_at = None;
            }
            task.status = status;
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            task.due_date = due_date;
        }
        if let Some(estimated_hours) = update.estimated_hours {
            task.estimated_hours = Some(estimated_hours);
        }
        task.updated_at = Utc::now();

        Ok(task.clone())
    }

    async fn delete_task(&self, task_id: Uuid) -> ClientResult<()> {
        let mut state = self.state.lock().expect("mock state poisoned");
        if !state.tasks.iter().any(|t| t.id == task_id) {
            return Err(ClientError::NotFound("Task not found".to_string()));
        }
        state.tasks.retain(|t| t.id != task_id);
        Ok(())
    }

    async fn dashboard_analytics(&self) -> ClientResult<DashboardAnalytics> {
        let state = self.state.lock().expect("mock state poisoned");
        let user_id = self.session_user_id(&state)?;

        let projects: Vec<&Project> = state
            .projects
            .iter()
            .filter(|p| p.user_id == user_id)
            .collect();
        let total_projects = projects.len();
        let completed_projects = projects.iter().filter(|p| p.status.is_done()).count();
        let in_progress_projects = projects.iter().filter(|p| p.status.is_active()).count();

        let tasks: Vec<&Task> = state
            .tasks
            .iter()
            .filter(|t| projects.iter().any(|p| p.id == t.project_id))
            .collect();
        let total_tasks = tasks.len();
        let completed_tasks = tasks.iter().filter(|t| t.status.is_done()).count();

        let mut project_types: HashMap<String, u64> = HashMap::new();
        for project in &projects {
            *project_types
                .entry(project.project_type.as_str().to_string())
                .or_insert(0) += 1;
        }

        Ok(DashboardAnalytics {
            projects: ProjectTotals {
                total: total_projects as u64,
                completed: completed_projects as u64,
                in_progress: in_progress_projects as u64,
                completion_rate: percentage(completed_projects, total_projects),
            },
            tasks: TaskTotals {
                total: total_tasks as u64,
                completed: completed_tasks as u64,
                completion_rate: percentage(completed_tasks, total_tasks),
            },
            project_types,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_rejects_bad_password() {
        let api = MockApi::with_demo_data();
        let result = api
            .login(LoginRequest {
                email: "john.doe@demo.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ClientError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let api = MockApi::with_demo_data();
        let result = api
            .register(RegisterRequest {
                name: "Imposter".to_string(),
                email: "JOHN.DOE@demo.com".to_string(),
                password: "secret1".to_string(),
                title: None,
                bio: None,
                skills: Vec::new(),
                social_links: HashMap::new(),
            })
            .await;
        assert!(matches!(result, Err(ClientError::Api { status: 400, .. })));
    }

    #[tokio::test]
    async fn test_unauthenticated_analytics_is_rejected() {
        let api = MockApi::with_demo_data();
        let result = api.dashboard_analytics().await;
        assert!(matches!(result, Err(ClientError::Unauthorized)));
    }
}
