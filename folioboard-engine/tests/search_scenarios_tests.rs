/// End-to-end engine scenarios
///
/// Runs the aggregation, recency, and search components together over a
/// realistic corpus, the way the dashboard combines them.

use chrono::{TimeZone, Utc};
use folioboard_engine::aggregate::{aggregate_by, completion_rate};
use folioboard_engine::metrics::{format_result_count, status_distribution};
use folioboard_engine::recency::{recent_items, DEFAULT_ACTIVITY_WINDOW_DAYS};
use folioboard_engine::search::highlight::spans;
use folioboard_engine::search::{search, Corpus, SearchFilters, SearchScope};
use folioboard_shared::models::{
    Priority, Project, ProjectStatus, ProjectType, Task, TaskStatus, User,
};
use std::collections::HashMap;
use uuid::Uuid;

fn at(day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap()
}

fn project(title: &str, status: ProjectStatus, technologies: &[&str], created_day: u32) -> Project {
    Project {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{} description", title),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        status,
        start_date: None,
        end_date: None,
        project_type: ProjectType::Software,
        priority: Priority::Medium,
        tags: Vec::new(),
        files: Vec::new(),
        created_at: at(created_day),
        updated_at: at(created_day),
    }
}

fn task(title: &str, status: TaskStatus) -> Task {
    Task {
        id: Uuid::new_v4(),
        project_id: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        status,
        priority: Priority::High,
        due_date: None,
        estimated_hours: Some(4.0),
        completed_at: None,
        created_at: at(1),
        updated_at: at(1),
    }
}

fn user(name: &str, title: &str, skills: &[&str]) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@demo.com", name.to_lowercase().replace(' ', ".")),
        title: Some(title.to_string()),
        bio: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        social_links: HashMap::new(),
        created_at: at(1),
        updated_at: at(1),
    }
}

fn demo_corpus() -> (Vec<Project>, Vec<Task>, Vec<User>) {
    let projects = vec![
        project("Portfolio site", ProjectStatus::Completed, &["React", "FastAPI"], 2),
        project("Mobile app", ProjectStatus::Completed, &["react-native"], 20),
        project("Design refresh", ProjectStatus::InProgress, &["Figma"], 25),
    ];
    let tasks = vec![
        task("Ship landing page", TaskStatus::Completed),
        task("Review analytics copy", TaskStatus::Review),
    ];
    let users = vec![
        user("Demo User", "Full Stack Developer", &["JavaScript", "Rust"]),
        user("John Doe", "Project Manager", &["Scrum", "Agile"]),
    ];
    (projects, tasks, users)
}

#[test]
fn aggregation_matches_the_dashboard_numbers() {
    let (projects, _, _) = demo_corpus();

    let by_status = aggregate_by(&projects, |p| p.status);
    assert_eq!(by_status[&ProjectStatus::Completed], 2);
    assert_eq!(by_status[&ProjectStatus::InProgress], 1);
    assert_eq!(by_status.values().sum::<usize>(), projects.len());

    // 2 of 3 completed rounds to 67.
    assert_eq!(completion_rate(&projects, |p| p.status.is_done()), 67);

    let rows = status_distribution(&projects);
    assert_eq!(rows[0].label, "Completed");
    assert_eq!(rows[0].percentage, 66.7);
}

#[test]
fn recent_window_counts_only_the_trailing_month() {
    let (projects, _, _) = demo_corpus();
    let now = at(28);

    let recent: Vec<_> = recent_items(
        &projects,
        |p| Some(p.created_at),
        DEFAULT_ACTIVITY_WINDOW_DAYS,
        now,
    )
    .collect();
    // All three were created this month.
    assert_eq!(recent.len(), 3);

    let tight: Vec<_> = recent_items(&projects, |p| Some(p.created_at), 7, now).collect();
    let titles: Vec<&str> = tight.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Mobile app", "Design refresh"]);
}

#[test]
fn react_query_matches_both_react_and_react_native() {
    let (projects, tasks, users) = demo_corpus();
    let corpus = Corpus::new(&projects, &tasks, &users);

    let results = search("React", &SearchFilters::default(), &corpus);
    let titles: Vec<&str> = results.projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Portfolio site", "Mobile app"]);

    // A corpus whose only technology is Vue stays out.
    let vue_only = vec![project("Vue site", ProjectStatus::Planning, &["Vue"], 3)];
    let corpus = Corpus::new(&vue_only, &[], &[]);
    assert!(search("React", &SearchFilters::default(), &corpus).is_empty());
}

#[test]
fn demo_query_scoped_to_users_finds_exactly_demo_user() {
    let (projects, tasks, users) = demo_corpus();
    let corpus = Corpus::new(&projects, &tasks, &users);

    let filters = SearchFilters {
        scope: SearchScope::Users,
        ..Default::default()
    };
    let results = search("demo", &filters, &corpus);

    assert!(results.projects.is_empty());
    assert!(results.tasks.is_empty());
    assert_eq!(results.users.len(), 1);
    assert_eq!(results.users[0].name, "Demo User");
    assert_eq!(results.total, 1);
    assert_eq!(format_result_count(results.total), "1 result");
}

#[test]
fn highlight_spans_reconstruct_matched_titles() {
    let (projects, tasks, users) = demo_corpus();
    let corpus = Corpus::new(&projects, &tasks, &users);

    let results = search("site", &SearchFilters::default(), &corpus);
    for hit in &results.projects {
        let runs = spans(&hit.title, "site");
        let rebuilt: String = runs.iter().map(|s| s.text(&hit.title)).collect();
        assert_eq!(rebuilt, hit.title);
        assert!(runs.iter().any(|s| s.matched));
    }
}

#[test]
fn short_and_empty_queries_return_the_empty_record() {
    let (projects, tasks, users) = demo_corpus();
    let corpus = Corpus::new(&projects, &tasks, &users);

    for query in ["", "a"] {
        let results = search(query, &SearchFilters::default(), &corpus);
        assert!(results.projects.is_empty());
        assert!(results.tasks.is_empty());
        assert!(results.users.is_empty());
        assert_eq!(results.total, 0);
    }
}
