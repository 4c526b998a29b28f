//! Per-episode environment state.
//!
//! An episode spans one reset-to-reset interval. The state is a plain value
//! owned by whoever runs the session (the HTTP layer keeps it behind a lock
//! in `AppState`); nothing here is global, so tests and multiple sessions can
//! each hold their own.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One mutating action reported by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ActionRecord {
    /// Action kind, e.g. "create_task"
    pub action: String,

    /// Caller-provided context for the action
    pub detail: serde_json::Value,

    /// When the action was recorded
    pub timestamp: DateTime<Utc>,
}

/// Mutable counters for the current episode.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeState {
    /// Mutating actions reported so far this episode
    pub actions_taken: u64,

    /// Sum of rewards from goals validated as completed this episode
    pub cumulative_reward: f64,

    /// Episode counter, starts at 1 and increments on every reset
    pub episode_number: u64,

    /// Ordered log of reported actions, cleared on reset
    pub action_history: Vec<ActionRecord>,
}

impl EpisodeState {
    /// Fresh state for the first episode.
    pub fn new() -> Self {
        Self {
            actions_taken: 0,
            cumulative_reward: 0.0,
            episode_number: 1,
            action_history: Vec::new(),
        }
    }

    /// Record a mutating action reported by the caller.
    pub fn record_action(&mut self, action: &str, detail: serde_json::Value) {
        self.actions_taken += 1;
        self.action_history.push(ActionRecord {
            action: action.to_string(),
            detail,
            timestamp: Utc::now(),
        });
    }

    /// Fold a non-negative reward into the episode total.
    pub fn accumulate(&mut self, reward: f64) {
        debug_assert!(reward >= 0.0, "rewards are never negative");
        self.cumulative_reward += reward;
    }

    /// Start a new episode: zero the counters, clear the history, bump the
    /// episode number. Returns the new episode number. Reseeding the task
    /// store is the caller's responsibility and must finish before the reset
    /// is observable.
    pub fn reset(&mut self) -> u64 {
        self.actions_taken = 0;
        self.cumulative_reward = 0.0;
        self.action_history.clear();
        self.episode_number += 1;
        self.episode_number
    }
}

impl Default for EpisodeState {
    fn default() -> Self {
        Self::new()
    }
}
