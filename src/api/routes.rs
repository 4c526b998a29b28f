//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::json;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::env::{evaluate, summarize, EpisodeState, Goal, GoalSummary, Observation};
use crate::store::{InMemoryTaskStore, StoreError, TaskFilter, TaskStore};
use crate::task::{Task, TaskDraft, TaskPatch};

use super::types::*;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// Task store (the environment re-reads a fresh snapshot on every call)
    pub store: Arc<dyn TaskStore>,
    /// Counters for the current episode
    pub episode: RwLock<EpisodeState>,
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let store: Arc<dyn TaskStore> = if config.seed_on_startup {
        let store = InMemoryTaskStore::seeded().await;
        tracing::info!("Task store seeded with initial mock dataset");
        Arc::new(store)
    } else {
        Arc::new(InMemoryTaskStore::new())
    };

    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        episode: RwLock::new(EpisodeState::new()),
    });

    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/api/rl/state", get(rl_state))
        .route("/api/rl/goals", get(rl_goals))
        .route("/api/rl/validate/:goal", post(rl_validate))
        .route("/api/rl/reset", post(rl_reset))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn store_error(err: StoreError) -> (StatusCode, String) {
    match err {
        StoreError::EmptyTitle => (StatusCode::BAD_REQUEST, err.to_string()),
    }
}

fn not_found(id: i64) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("Task {} not found", id))
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "operational".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_goals: Goal::ALL.len(),
    })
}

/// List all tasks with optional status/priority filtering.
async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListTasksQuery>,
) -> Json<Vec<Task>> {
    let filter = TaskFilter {
        status: query.status,
        priority: query.priority,
    };
    Json(state.store.list(filter).await)
}

/// Get a specific task by id.
async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, (StatusCode, String)> {
    state
        .store
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Create a new task. Records a `create_task` action for the episode.
async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>), (StatusCode, String)> {
    let task = state.store.create(draft).await.map_err(store_error)?;

    state.episode.write().await.record_action(
        "create_task",
        json!({
            "task_id": task.id,
            "title": task.title,
            "priority": task.priority,
        }),
    );

    Ok((StatusCode::CREATED, Json(task)))
}

/// Apply a partial update. Records an `update_task` action for the episode.
async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, (StatusCode, String)> {
    let updated = state
        .store
        .update(id, patch)
        .await
        .map_err(store_error)?
        .ok_or_else(|| not_found(id))?;

    state
        .episode
        .write()
        .await
        .record_action("update_task", json!({ "task_id": id }));

    Ok(Json(updated))
}

/// Delete a task. Records a `delete_task` action for the episode.
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, (StatusCode, String)> {
    if !state.store.delete(id).await {
        return Err(not_found(id));
    }

    state
        .episode
        .write()
        .await
        .record_action("delete_task", json!({ "task_id": id }));

    Ok(Json(DeleteResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

/// Current environment observation.
async fn rl_state(State(state): State<Arc<AppState>>) -> Json<Observation> {
    let snapshot = state.store.snapshot().await;
    let episode = state.episode.read().await;
    Json(summarize(&snapshot, &episode))
}

/// List the goal catalog.
async fn rl_goals() -> Json<Vec<GoalSummary>> {
    Json(Goal::ALL.iter().map(|g| g.summary()).collect())
}

/// Validate one goal against a fresh snapshot.
///
/// An unknown goal name is a 404, reported distinctly from a goal that
/// legitimately evaluates to `completed=false`, and never touches episode
/// state. On success the reward is folded into the episode total, including
/// when an already-satisfied goal is re-validated.
async fn rl_validate(
    State(state): State<Arc<AppState>>,
    Path(goal_name): Path<String>,
) -> Result<Json<ValidateResponse>, (StatusCode, String)> {
    let goal = Goal::from_name(&goal_name).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            crate::env::EnvError::UnknownGoal {
                name: goal_name.clone(),
            }
            .to_string(),
        )
    })?;

    let snapshot = state.store.snapshot().await;
    let verdict = evaluate(goal, &snapshot, chrono::Utc::now());

    if verdict.completed {
        state.episode.write().await.accumulate(verdict.reward);
    }

    tracing::debug!(
        goal = goal.name(),
        completed = verdict.completed,
        reward = verdict.reward,
        "validated goal"
    );

    Ok(Json(ValidateResponse::new(goal.name(), verdict)))
}

/// Reset the environment: reseed the store, zero the episode counters.
///
/// The episode lock is held across the store reseed so the reset acts as a
/// barrier - no observation or validation interleaves with a half-reset
/// environment.
async fn rl_reset(State(state): State<Arc<AppState>>) -> Json<ResetResponse> {
    let mut episode = state.episode.write().await;
    state.store.reset().await;
    let episode_number = episode.reset();

    tracing::info!(episode_number, "environment reset");

    Json(ResetResponse {
        message: "Environment reset successfully".to_string(),
        episode_number,
    })
}
