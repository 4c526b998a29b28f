//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::env::Verdict;
use crate::task::{TaskPriority, TaskStatus};

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Number of goals in the catalog
    pub total_goals: usize,
}

/// Query filters for listing tasks.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListTasksQuery {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

/// Response for a single goal validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    /// The goal that was evaluated
    pub goal: String,

    /// Whether the goal's predicate passed
    pub completed: bool,

    /// Reward granted (0 when not completed)
    pub reward: f64,

    /// Human-readable explanation
    pub feedback: String,

    /// Quantities the predicate compared
    pub details: serde_json::Value,
}

impl ValidateResponse {
    pub fn new(goal: &str, verdict: Verdict) -> Self {
        Self {
            goal: goal.to_string(),
            completed: verdict.completed,
            reward: verdict.reward,
            feedback: verdict.feedback,
            details: verdict.details,
        }
    }
}

/// Response after resetting the environment.
#[derive(Debug, Clone, Serialize)]
pub struct ResetResponse {
    pub message: String,

    /// The episode number now in effect
    pub episode_number: u64,
}

/// Response after deleting a task.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
