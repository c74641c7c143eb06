/// Display-ready metric records
///
/// Maps raw aggregates into the records the dashboard cards and
/// distribution lists render: a label, a formatted value, a change line,
/// and a color key. No computation happens here beyond formatting; the
/// numbers come from [`crate::aggregate`] or the analytics snapshot.
///
/// All-zero input (an empty project set) presents zero-valued records
/// rather than failing.

use folioboard_shared::models::{
    DashboardAnalytics, Priority, Project, ProjectStatus, ProjectType,
};
use serde::Serialize;
use std::hash::Hash;

use crate::aggregate::{aggregate_by, percentage};

/// Color key understood by the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Gray,
}

impl ColorKey {
    /// Converts the color to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKey::Blue => "blue",
            ColorKey::Green => "green",
            ColorKey::Yellow => "yellow",
            ColorKey::Orange => "orange",
            ColorKey::Red => "red",
            ColorKey::Purple => "purple",
            ColorKey::Gray => "gray",
        }
    }
}

/// One dashboard metric card
#[derive(Debug, Clone, Serialize)]
pub struct MetricRecord {
    /// Card label
    pub label: String,

    /// Formatted headline value
    pub value: String,

    /// Secondary change/context line
    pub change: String,

    /// Color key
    pub color: ColorKey,
}

/// One row of a distribution list
#[derive(Debug, Clone, Serialize)]
pub struct DistributionRow {
    /// Row label
    pub label: String,

    /// Entity count in this bucket
    pub count: usize,

    /// Share of the whole, one decimal place
    pub percentage: f64,

    /// Color key
    pub color: ColorKey,
}

/// Formats a snapshot rate the way the UI shows it: no trailing `.0`
fn format_rate(rate: f64) -> String {
    if rate.fract().abs() < 1e-9 {
        format!("{}", rate as i64)
    } else {
        format!("{:.1}", rate)
    }
}

/// Builds the four key metric cards for the dashboard header
pub fn key_metrics(analytics: &DashboardAnalytics, recent_count: usize) -> Vec<MetricRecord> {
    let projects = &analytics.projects;
    let tasks = &analytics.tasks;

    vec![
        MetricRecord {
            label: "Total Projects".to_string(),
            value: projects.total.to_string(),
            change: format!("+{} this month", recent_count),
            color: ColorKey::Blue,
        },
        MetricRecord {
            label: "Completion Rate".to_string(),
            value: format!("{}%", format_rate(projects.completion_rate)),
            change: format!("{}/{} completed", projects.completed, projects.total),
            color: ColorKey::Green,
        },
        MetricRecord {
            label: "Active Projects".to_string(),
            value: projects.in_progress.to_string(),
            change: "Currently in progress".to_string(),
            color: ColorKey::Yellow,
        },
        MetricRecord {
            label: "Task Completion".to_string(),
            value: format!("{}%", format_rate(tasks.completion_rate)),
            change: format!("{}/{} tasks", tasks.completed, tasks.total),
            color: ColorKey::Purple,
        },
    ]
}

fn status_style(status: ProjectStatus) -> (&'static str, ColorKey) {
    match status {
        ProjectStatus::Planning => ("Planning", ColorKey::Yellow),
        ProjectStatus::InProgress => ("In Progress", ColorKey::Blue),
        ProjectStatus::Completed => ("Completed", ColorKey::Green),
        ProjectStatus::OnHold => ("On Hold", ColorKey::Gray),
        ProjectStatus::Unknown => ("Unknown", ColorKey::Gray),
    }
}

fn type_style(project_type: ProjectType) -> (&'static str, ColorKey) {
    match project_type {
        ProjectType::Software => ("Software", ColorKey::Blue),
        ProjectType::Design => ("Design", ColorKey::Purple),
        ProjectType::Business => ("Business", ColorKey::Green),
        ProjectType::Other => ("Other", ColorKey::Gray),
        ProjectType::Unknown => ("Unknown", ColorKey::Gray),
    }
}

fn priority_style(priority: Priority) -> (&'static str, ColorKey) {
    match priority {
        Priority::Low => ("Low", ColorKey::Gray),
        Priority::Medium => ("Medium", ColorKey::Yellow),
        Priority::High => ("High", ColorKey::Orange),
        Priority::Critical => ("Critical", ColorKey::Red),
        Priority::Unknown => ("Unknown", ColorKey::Gray),
    }
}

/// Builds distribution rows over one project field, first-seen order
fn distribution<K, F, S>(projects: &[Project], field: F, style: S) -> Vec<DistributionRow>
where
    K: Eq + Hash + Copy,
    F: Fn(&Project) -> K,
    S: Fn(K) -> (&'static str, ColorKey),
{
    let counts = aggregate_by(projects, &field);
    let total = projects.len();

    let mut seen: Vec<K> = Vec::new();
    let mut rows = Vec::new();
    for project in projects {
        let key = field(project);
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);

        let count = counts[&key];
        let (label, color) = style(key);
        rows.push(DistributionRow {
            label: label.to_string(),
            count,
            percentage: percentage(count, total),
            color,
        });
    }
    rows
}

/// Project status distribution rows
pub fn status_distribution(projects: &[Project]) -> Vec<DistributionRow> {
    distribution(projects, |p| p.status, status_style)
}

/// Project type distribution rows
pub fn type_distribution(projects: &[Project]) -> Vec<DistributionRow> {
    distribution(projects, |p| p.project_type, type_style)
}

/// Project priority distribution rows
pub fn priority_distribution(projects: &[Project]) -> Vec<DistributionRow> {
    distribution(projects, |p| p.priority, priority_style)
}

/// Pluralized result count, e.g. "1 result" / "3 results"
pub fn format_result_count(total: usize) -> String {
    if total == 1 {
        "1 result".to_string()
    } else {
        format!("{} results", total)
    }
}

/// Activity score for the trailing window: ten points per recent project,
/// capped at 100
pub fn activity_score(recent_count: usize) -> u32 {
    (recent_count as u32).saturating_mul(10).min(100)
}

/// Advisory category shown on the analytics page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Completion rate below half
    ImproveCompletionRate,

    /// Too many projects in progress at once
    FocusActiveProjects,

    /// No new projects inside the activity window
    StayActive,

    /// High completion rate and recent activity
    KeepItUp,
}

/// One advisory record
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Advisory category
    pub kind: RecommendationKind,

    /// Headline
    pub title: String,

    /// Body text
    pub body: String,
}

/// Builds the advisory records for the analytics page
pub fn recommendations(analytics: &DashboardAnalytics, recent_count: usize) -> Vec<Recommendation> {
    let mut out = Vec::new();
    let projects = &analytics.projects;

    if projects.completion_rate < 50.0 {
        out.push(Recommendation {
            kind: RecommendationKind::ImproveCompletionRate,
            title: "Improve Project Completion Rate".to_string(),
            body: "Your project completion rate is below 50%. Consider breaking down \
                   large projects into smaller, manageable tasks."
                .to_string(),
        });
    }

    if projects.in_progress > 5 {
        out.push(Recommendation {
            kind: RecommendationKind::FocusActiveProjects,
            title: "Focus on Active Projects".to_string(),
            body: format!(
                "You have {} projects in progress. Consider focusing on completing \
                 existing projects before starting new ones.",
                projects.in_progress
            ),
        });
    }

    if recent_count == 0 {
        out.push(Recommendation {
            kind: RecommendationKind::StayActive,
            title: "Stay Active".to_string(),
            body: "No new projects in the last 30 days. Consider starting a new \
                   project to maintain momentum."
                .to_string(),
        });
    }

    if projects.completion_rate >= 80.0 && recent_count > 0 {
        out.push(Recommendation {
            kind: RecommendationKind::KeepItUp,
            title: "Great Job!".to_string(),
            body: "You're maintaining excellent project completion rates and staying \
                   active. Keep up the great work!"
                .to_string(),
        });
    }

    out
}
