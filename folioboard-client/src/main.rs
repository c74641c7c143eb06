//! # Folioboard
//!
//! Demo binary for the dashboard data layer. Runs entirely against the
//! in-memory mock backend: signs in as a demo account, seeds a few
//! projects and tasks, refreshes the snapshots, prints the dashboard
//! metrics, and runs a debounced search.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p folioboard-client
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio_stream::StreamExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folioboard_client::api::{MockApi, PortfolioApi};
use folioboard_client::config::Config;
use folioboard_client::dispatcher::SearchDispatcher;
use folioboard_client::error::ClientResult;
use folioboard_client::state::DashboardState;
use folioboard_engine::metrics::{format_result_count, key_metrics, status_distribution};
use folioboard_engine::recency::{recent_items, DEFAULT_ACTIVITY_WINDOW_DAYS};
use folioboard_engine::search::SearchFilters;
use folioboard_shared::models::{CreateProject, CreateTask, ProjectStatus, ProjectType, TaskStatus};
use folioboard_shared::session::MemorySessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folioboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Folioboard v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    let api: Arc<dyn PortfolioApi> = Arc::new(MockApi::with_demo_data());
    let state = DashboardState::new(api, Box::new(MemorySessionStore::new()));

    if !state.initialize() {
        let user = state.sign_in("john.doe@demo.com", "demo123").await?;
        tracing::info!(user = %user.name, "Signed in to the mock backend");
    }

    seed_demo_projects(&state).await?;
    state.refresh().await?;

    // Dashboard metrics over the fresh snapshot
    let analytics = state.analytics();
    let corpus = state.corpus();
    let recent_count = {
        let snapshot = corpus.read().await;
        recent_items(
            &snapshot.projects,
            |p| Some(p.created_at),
            DEFAULT_ACTIVITY_WINDOW_DAYS,
            chrono::Utc::now(),
        )
        .count()
    };

    for metric in key_metrics(&analytics, recent_count) {
        tracing::info!(value = %metric.value, change = %metric.change, "{}", metric.label);
    }
    {
        let snapshot = corpus.read().await;
        for row in status_distribution(&snapshot.projects) {
            tracing::info!(count = row.count, percentage = row.percentage, "{}", row.label);
        }
    }

    // Debounced search: the first query is superseded by the second.
    let (dispatcher, mut outcomes) = SearchDispatcher::with_debounce(
        state.search_backend(),
        Duration::from_millis(config.search.debounce_ms),
    );
    dispatcher.request("rea", SearchFilters::default());
    dispatcher.request("react", SearchFilters::default());

    if let Some(outcome) = outcomes.next().await {
        tracing::info!(
            query = %outcome.query,
            "Search returned {}",
            format_result_count(outcome.results.total)
        );
    }

    dispatcher.close();
    state.sign_out().await;
    tracing::info!("Done");
    Ok(())
}

/// Seeds the scenario used across the docs: two completed projects and
/// one in progress, with a couple of tasks.
async fn seed_demo_projects(state: &DashboardState) -> ClientResult<()> {
    let api = state.api();

    let portfolio = api
        .create_project(CreateProject {
            title: "Portfolio site".to_string(),
            description: "Personal portfolio with project showcase".to_string(),
            technologies: vec!["React".to_string(), "FastAPI".to_string()],
            status: ProjectStatus::Completed,
            start_date: None,
            end_date: None,
            project_type: ProjectType::Software,
            priority: Default::default(),
            tags: vec!["web".to_string()],
        })
        .await?;

    api.create_project(CreateProject {
        title: "Mobile companion app".to_string(),
        description: "Companion app for the portfolio".to_string(),
        technologies: vec!["react-native".to_string()],
        status: ProjectStatus::Completed,
        start_date: None,
        end_date: None,
        project_type: ProjectType::Software,
        priority: Default::default(),
        tags: Vec::new(),
    })
    .await?;

    api.create_project(CreateProject {
        title: "Brand refresh".to_string(),
        description: "New visual identity".to_string(),
        technologies: vec!["Figma".to_string()],
        status: ProjectStatus::InProgress,
        start_date: None,
        end_date: None,
        project_type: ProjectType::Design,
        priority: Default::default(),
        tags: Vec::new(),
    })
    .await?;

    api.create_task(
        portfolio.id,
        CreateTask {
            title: "Ship landing page".to_string(),
            description: None,
            status: TaskStatus::Completed,
            priority: Default::default(),
            due_date: None,
            estimated_hours: Some(6.0),
        },
    )
    .await?;
    api.create_task(
        portfolio.id,
        CreateTask {
            title: "Write case studies".to_string(),
            description: Some("One per flagship project".to_string()),
            status: TaskStatus::InProgress,
            priority: Default::default(),
            due_date: None,
            estimated_hours: Some(8.0),
        },
    )
    .await?;

    Ok(())
}
