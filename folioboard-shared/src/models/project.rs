/// Project model
///
/// This module provides the Project model, its status/type enumerations,
/// and the input structs for creating and editing projects.
///
/// # Lifecycle
///
/// ```text
/// planning → in-progress → completed
///                       → on-hold → in-progress
/// ```
///
/// The dashboard does not enforce transitions; status is whatever the
/// owner last set. Unknown wire values land on the fallback variant
/// instead of failing deserialization.
///
/// # Example
///
/// ```
/// use folioboard_shared::models::project::{Project, ProjectStatus};
///
/// fn active(projects: &[Project]) -> impl Iterator<Item = &Project> {
///     projects
///         .iter()
///         .filter(|p| p.status == ProjectStatus::InProgress)
/// }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::priority::Priority;

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Not started yet
    Planning,

    /// Actively being worked on
    InProgress,

    /// Finished
    Completed,

    /// Paused indefinitely
    OnHold,

    /// Fallback bucket for unrecognized wire values
    #[serde(other)]
    Unknown,
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Planning
    }
}

impl ProjectStatus {
    /// All recognized statuses
    pub const KNOWN: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];

    /// Converts the status to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Unknown => "unknown",
        }
    }

    /// Checks if the project counts toward completion rates
    pub fn is_done(&self) -> bool {
        matches!(self, ProjectStatus::Completed)
    }

    /// Checks if the project is actively being worked on
    pub fn is_active(&self) -> bool {
        matches!(self, ProjectStatus::InProgress)
    }
}

/// Project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Software project
    Software,

    /// Design project
    Design,

    /// Business project
    Business,

    /// Anything that fits none of the above
    Other,

    /// Fallback bucket for unrecognized wire values
    #[serde(other)]
    Unknown,
}

impl Default for ProjectType {
    fn default() -> Self {
        ProjectType::Software
    }
}

impl ProjectType {
    /// All recognized project types
    pub const KNOWN: [ProjectType; 4] = [
        ProjectType::Software,
        ProjectType::Design,
        ProjectType::Business,
        ProjectType::Other,
    ];

    /// Converts the type to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Software => "software",
            ProjectType::Design => "design",
            ProjectType::Business => "business",
            ProjectType::Other => "other",
            ProjectType::Unknown => "unknown",
        }
    }
}

/// Project model
///
/// A project is exclusively owned by one user (by reference). Task
/// ownership hangs off the project via `Task::project_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project ID (UUID v4)
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Project title
    pub title: String,

    /// Project description
    pub description: String,

    /// Technologies used, in insertion order
    #[serde(default)]
    pub technologies: Vec<String>,

    /// Lifecycle status
    pub status: ProjectStatus,

    /// When work started (optional)
    pub start_date: Option<DateTime<Utc>>,

    /// When work ended (optional)
    pub end_date: Option<DateTime<Utc>>,

    /// Project category
    pub project_type: ProjectType,

    /// Priority level
    pub priority: Priority,

    /// Free-form tags, in insertion order
    #[serde(default)]
    pub tags: Vec<String>,

    /// Names of uploaded files attached to the project
    #[serde(default)]
    pub files: Vec<String>,

    /// When the project was created
    pub created_at: DateTime<Utc>,

    /// When the project was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new project
///
/// Defaults mirror the backend contract: status=planning,
/// project_type=software, priority=medium.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProject {
    /// Project title
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    /// Project description
    pub description: String,

    /// Technologies used
    #[serde(default)]
    pub technologies: Vec<String>,

    /// Lifecycle status
    #[serde(default)]
    pub status: ProjectStatus,

    /// When work started
    pub start_date: Option<DateTime<Utc>>,

    /// When work ended
    pub end_date: Option<DateTime<Utc>>,

    /// Project category
    #[serde(default)]
    pub project_type: ProjectType,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Input for updating an existing project
///
/// All fields are optional; only non-None fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProject {
    /// New title
    #[validate(length(min = 1, message = "Title must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Replacement technologies list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,

    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,

    /// New start date (use Some(None) to clear)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Option<DateTime<Utc>>>,

    /// New end date (use Some(None) to clear)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Option<DateTime<Utc>>>,

    /// New project category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,

    /// New priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Replacement tags list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(ProjectStatus::Planning.as_str(), "planning");
        assert_eq!(ProjectStatus::InProgress.as_str(), "in-progress");
        assert_eq!(ProjectStatus::Completed.as_str(), "completed");
        assert_eq!(ProjectStatus::OnHold.as_str(), "on-hold");
    }

    #[test]
    fn test_status_is_done() {
        assert!(ProjectStatus::Completed.is_done());
        assert!(!ProjectStatus::Planning.is_done());
        assert!(!ProjectStatus::InProgress.is_done());
        assert!(!ProjectStatus::OnHold.is_done());
        assert!(!ProjectStatus::Unknown.is_done());
    }

    #[test]
    fn test_status_wire_format_is_kebab_case() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let back: ProjectStatus = serde_json::from_str("\"on-hold\"").unwrap();
        assert_eq!(back, ProjectStatus::OnHold);
    }

    #[test]
    fn test_unknown_status_falls_back() {
        let parsed: ProjectStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(parsed, ProjectStatus::Unknown);
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let parsed: ProjectType = serde_json::from_str("\"hardware\"").unwrap();
        assert_eq!(parsed, ProjectType::Unknown);
    }

    #[test]
    fn test_create_project_defaults() {
        let input: CreateProject = serde_json::from_str(
            r#"{"title": "Portfolio site", "description": "Personal site"}"#,
        )
        .unwrap();
        assert_eq!(input.status, ProjectStatus::Planning);
        assert_eq!(input.project_type, ProjectType::Software);
        assert_eq!(input.priority, Priority::Medium);
        assert!(input.technologies.is_empty());
    }
}
