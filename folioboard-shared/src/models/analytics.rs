/// Dashboard analytics snapshot
///
/// These types mirror the analytics record returned by the backend's
/// dashboard endpoint. They are a wire contract, not a computation: the
/// engine crate recomputes distributions locally from project snapshots,
/// while these totals come pre-aggregated from the server.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pre-aggregated project counts for one user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectTotals {
    /// Total number of projects
    pub total: u64,

    /// Projects in the completed status
    pub completed: u64,

    /// Projects in the in-progress status
    pub in_progress: u64,

    /// Completion percentage, one decimal place, 0 when there are no projects
    pub completion_rate: f64,
}

/// Pre-aggregated task counts across one user's projects
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskTotals {
    /// Total number of tasks
    pub total: u64,

    /// Tasks in the completed status
    pub completed: u64,

    /// Completion percentage, one decimal place, 0 when there are no tasks
    pub completion_rate: f64,
}

/// Analytics snapshot for the dashboard
///
/// An empty project set produces all-zero totals and an empty type map;
/// consumers present zero-valued metrics rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardAnalytics {
    /// Project counts
    pub projects: ProjectTotals,

    /// Task counts
    pub tasks: TaskTotals,

    /// Project count per project-type wire string
    #[serde(default)]
    pub project_types: HashMap<String, u64>,
}
