/// Multi-entity search
///
/// Unifies projects, tasks, and users under one matching and filtering
/// contract: case-insensitive substring match over a per-type field set,
/// followed by conjunctive status/type/priority filters. Results keep
/// the corpus's original relative order within each group; there is no
/// relevance scoring beyond the binary match.
///
/// # Field sets
///
/// - Project: title, description, technologies
/// - Task: title, description
/// - User: name, title, skills
///
/// # Example
///
/// ```
/// use folioboard_engine::search::{search, Corpus, SearchFilters};
///
/// let corpus = Corpus::new(&[], &[], &[]);
/// let results = search("rust", &SearchFilters::default(), &corpus);
/// assert_eq!(results.total, 0);
/// ```

pub mod highlight;

use folioboard_shared::models::{
    Priority, Project, ProjectStatus, ProjectType, Task, TaskStatus, User,
};
use serde::{Deserialize, Serialize};

use self::highlight::contains_ci;

/// Queries shorter than this (after trimming) return nothing
///
/// Single characters match almost everything and are never worth the
/// round trip, so they short-circuit before any matching work.
pub const MIN_QUERY_LEN: usize = 2;

/// Which entity collections a search covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Search projects, tasks, and users
    All,

    /// Projects only
    Projects,

    /// Tasks only
    Tasks,

    /// Users only
    Users,
}

impl Default for SearchScope {
    fn default() -> Self {
        SearchScope::All
    }
}

impl SearchScope {
    fn covers_projects(&self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Projects)
    }

    fn covers_tasks(&self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Tasks)
    }

    fn covers_users(&self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Users)
    }
}

/// Status filter spanning both project and task statuses
///
/// The search UI offers one combined status select; `in-progress` and
/// `completed` exist in both status sets and match either entity kind,
/// the rest match their own kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    /// Projects in planning
    Planning,

    /// Projects or tasks in progress
    InProgress,

    /// Completed projects or tasks
    Completed,

    /// Projects on hold
    OnHold,

    /// Tasks not yet started
    Todo,

    /// Tasks awaiting review
    Review,
}

impl StatusFilter {
    /// Checks the filter against a project status
    pub fn matches_project(&self, status: ProjectStatus) -> bool {
        matches!(
            (self, status),
            (StatusFilter::Planning, ProjectStatus::Planning)
                | (StatusFilter::InProgress, ProjectStatus::InProgress)
                | (StatusFilter::Completed, ProjectStatus::Completed)
                | (StatusFilter::OnHold, ProjectStatus::OnHold)
        )
    }

    /// Checks the filter against a task status
    pub fn matches_task(&self, status: TaskStatus) -> bool {
        matches!(
            (self, status),
            (StatusFilter::Todo, TaskStatus::Todo)
                | (StatusFilter::InProgress, TaskStatus::InProgress)
                | (StatusFilter::Review, TaskStatus::Review)
                | (StatusFilter::Completed, TaskStatus::Completed)
        )
    }
}

/// Filter set applied on top of the text match
///
/// `scope` restricts which collections are searched at all. The field
/// filters are conjunctive: an entity must satisfy every active filter,
/// and an entity type that lacks a filtered field is excluded outright
/// (a priority filter drops all users; a project-type filter leaves only
/// projects).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Entity collections to search
    #[serde(default)]
    pub scope: SearchScope,

    /// Status the entity must be in
    pub status: Option<StatusFilter>,

    /// Project type the entity must have
    pub project_type: Option<ProjectType>,

    /// Priority the entity must have
    pub priority: Option<Priority>,
}

/// Borrowed snapshot of the searchable collections
#[derive(Debug, Clone, Copy)]
pub struct Corpus<'a> {
    /// Project snapshot
    pub projects: &'a [Project],

    /// Task snapshot
    pub tasks: &'a [Task],

    /// User snapshot
    pub users: &'a [User],
}

impl<'a> Corpus<'a> {
    /// Bundles the three collections into a corpus
    pub fn new(projects: &'a [Project], tasks: &'a [Task], users: &'a [User]) -> Self {
        Corpus {
            projects,
            tasks,
            users,
        }
    }
}

/// Search results, grouped by entity type
///
/// Groups preserve the corpus order; `total` is the sum of all three
/// group sizes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    /// Matching projects
    pub projects: Vec<Project>,

    /// Matching tasks
    pub tasks: Vec<Task>,

    /// Matching users
    pub users: Vec<User>,

    /// Total matches across all groups
    pub total: usize,
}

impl SearchResults {
    /// Checks whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

fn project_matches_text(project: &Project, query: &str) -> bool {
    contains_ci(&project.title, query)
        || contains_ci(&project.description, query)
        || project.technologies.iter().any(|t| contains_ci(t, query))
}

fn project_matches_filters(project: &Project, filters: &SearchFilters) -> bool {
    if let Some(status) = filters.status {
        if !status.matches_project(project.status) {
            return false;
        }
    }
    if let Some(project_type) = filters.project_type {
        if project.project_type != project_type {
            return false;
        }
    }
    if let Some(priority) = filters.priority {
        if project.priority != priority {
            return false;
        }
    }
    true
}

fn task_matches_text(task: &Task, query: &str) -> bool {
    contains_ci(&task.title, query)
        || task
            .description
            .as_deref()
            .is_some_and(|d| contains_ci(d, query))
}

fn task_matches_filters(task: &Task, filters: &SearchFilters) -> bool {
    // Tasks have no project type, so that filter excludes them entirely.
    if filters.project_type.is_some() {
        return false;
    }
    if let Some(status) = filters.status {
        if !status.matches_task(task.status) {
            return false;
        }
    }
    if let Some(priority) = filters.priority {
        if task.priority != priority {
            return false;
        }
    }
    true
}

fn user_matches_text(user: &User, query: &str) -> bool {
    contains_ci(&user.name, query)
        || user
            .title
            .as_deref()
            .is_some_and(|t| contains_ci(t, query))
        || user.skills.iter().any(|s| contains_ci(s, query))
}

fn user_matches_filters(filters: &SearchFilters) -> bool {
    // Users carry none of the filtered fields.
    filters.status.is_none() && filters.project_type.is_none() && filters.priority.is_none()
}

/// Searches the corpus for the query under the given filters
///
/// Queries shorter than [`MIN_QUERY_LEN`] after trimming return the
/// empty result set. An empty corpus returns the empty result set. The
/// corpus is only read; results carry owned clones of the matches.
pub fn search(query: &str, filters: &SearchFilters, corpus: &Corpus<'_>) -> SearchResults {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return SearchResults::default();
    }

    let mut results = SearchResults::default();

    if filters.scope.covers_projects() {
        results.projects = corpus
            .projects
            .iter()
            .filter(|p| project_matches_text(p, query) && project_matches_filters(p, filters))
            .cloned()
            .collect();
    }

    if filters.scope.covers_tasks() {
        results.tasks = corpus
            .tasks
            .iter()
            .filter(|t| task_matches_text(t, query) && task_matches_filters(t, filters))
            .cloned()
            .collect();
    }

    if filters.scope.covers_users() && user_matches_filters(filters) {
        results.users = corpus
            .users
            .iter()
            .filter(|u| user_matches_text(u, query))
            .cloned()
            .collect();
    }

    results.total = results.projects.len() + results.tasks.len() + results.users.len();
    results
}
