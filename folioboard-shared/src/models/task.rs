/// Task model
///
/// This module provides the Task model representing units of work under a
/// project. Tasks are created under a project, mutated in place (status
/// and title edits), and deleted independently of the project.
///
/// # State Machine
///
/// ```text
/// todo → in-progress → review → completed
/// ```
///
/// Any backward move is allowed; `completed_at` is set when a task enters
/// the completed status and cleared when it leaves it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::priority::Priority;

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started
    Todo,

    /// Being worked on
    InProgress,

    /// Awaiting review
    Review,

    /// Finished
    Completed,

    /// Fallback bucket for unrecognized wire values
    #[serde(other)]
    Unknown,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

impl TaskStatus {
    /// All recognized statuses, in workflow order
    pub const KNOWN: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Completed,
    ];

    /// Converts the status to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Review => "review",
            TaskStatus::Completed => "completed",
            TaskStatus::Unknown => "unknown",
        }
    }

    /// Checks if the task counts toward completion rates
    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }

    /// Checks if the task still needs work
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            TaskStatus::Todo | TaskStatus::InProgress | TaskStatus::Review
        )
    }
}

/// Task model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID (UUID v4)
    pub id: Uuid,

    /// Project this task belongs to (never null)
    pub project_id: Uuid,

    /// Task title
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Workflow status
    pub status: TaskStatus,

    /// Priority level
    pub priority: Priority,

    /// When the task is due (optional)
    pub due_date: Option<DateTime<Utc>>,

    /// Estimated effort in hours (optional, non-negative)
    pub estimated_hours: Option<f64>,

    /// When the task entered the completed status (None while open)
    pub completed_at: Option<DateTime<Utc>>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task under a project
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTask {
    /// Task title
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Workflow status (defaults to todo)
    #[serde(default)]
    pub status: TaskStatus,

    /// Priority level (defaults to medium)
    #[serde(default)]
    pub priority: Priority,

    /// When the task is due
    pub due_date: Option<DateTime<Utc>>,

    /// Estimated effort in hours
    #[validate(range(min = 0.0, message = "Estimated hours must be non-negative"))]
    pub estimated_hours: Option<f64>,
}

/// Input for updating an existing task
///
/// All fields are optional; only non-None fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTask {
    /// New title
    #[validate(length(min = 1, message = "Title must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description (use Some(None) to clear)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,

    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,

    /// New priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// New due date (use Some(None) to clear)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<DateTime<Utc>>>,

    /// New effort estimate
    #[validate(range(min = 0.0, message = "Estimated hours must be non-negative"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_as_str() {
        assert_eq!(TaskStatus::Todo.as_str(), "todo");
        assert_eq!(TaskStatus::InProgress.as_str(), "in-progress");
        assert_eq!(TaskStatus::Review.as_str(), "review");
        assert_eq!(TaskStatus::Completed.as_str(), "completed");
    }

    #[test]
    fn test_task_status_is_done() {
        assert!(TaskStatus::Completed.is_done());
        assert!(!TaskStatus::Todo.is_done());
        assert!(!TaskStatus::Review.is_done());
    }

    #[test]
    fn test_task_status_is_open() {
        assert!(TaskStatus::Todo.is_open());
        assert!(TaskStatus::InProgress.is_open());
        assert!(TaskStatus::Review.is_open());
        assert!(!TaskStatus::Completed.is_open());
        assert!(!TaskStatus::Unknown.is_open());
    }

    #[test]
    fn test_unknown_status_falls_back() {
        let parsed: TaskStatus = serde_json::from_str("\"blocked\"").unwrap();
        assert_eq!(parsed, TaskStatus::Unknown);
    }

    #[test]
    fn test_create_task_rejects_negative_estimate() {
        let input = CreateTask {
            title: "Write tests".to_string(),
            description: None,
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            due_date: None,
            estimated_hours: Some(-2.0),
        };
        assert!(input.validate().is_err());
    }
}
