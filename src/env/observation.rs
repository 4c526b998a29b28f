//! Compact observation of the board, consumed by agents.

use std::collections::BTreeMap;

use serde::Serialize;

use super::episode::EpisodeState;
use crate::task::{Task, TaskPriority, TaskStatus};

/// Aggregated environment state returned by `GET /api/rl/state`.
///
/// Both count maps contain every enum bucket, zero-filled, so consumers never
/// have to branch on missing keys.
#[derive(Debug, Clone, Serialize)]
pub struct Observation {
    pub total_tasks: usize,
    pub tasks_by_status: BTreeMap<&'static str, usize>,
    pub tasks_by_priority: BTreeMap<&'static str, usize>,

    /// Percentage of tasks completed; 0.0 when the board is empty
    pub completion_rate: f64,

    pub actions_taken: u64,
    pub current_reward: f64,
    pub episode_number: u64,
}

/// Summarize the snapshot and episode counters into one observation.
pub fn summarize(tasks: &[Task], episode: &EpisodeState) -> Observation {
    let mut by_status: BTreeMap<&'static str, usize> =
        TaskStatus::ALL.iter().map(|s| (s.as_str(), 0)).collect();
    let mut by_priority: BTreeMap<&'static str, usize> =
        TaskPriority::ALL.iter().map(|p| (p.as_str(), 0)).collect();

    for task in tasks {
        *by_status.entry(task.status.as_str()).or_insert(0) += 1;
        *by_priority.entry(task.priority.as_str()).or_insert(0) += 1;
    }

    let completed = by_status.get(TaskStatus::Completed.as_str()).copied().unwrap_or(0);
    let completion_rate = if tasks.is_empty() {
        0.0
    } else {
        completed as f64 / tasks.len() as f64 * 100.0
    };

    Observation {
        total_tasks: tasks.len(),
        tasks_by_status: by_status,
        tasks_by_priority: by_priority,
        completion_rate,
        actions_taken: episode.actions_taken,
        current_reward: episode.cumulative_reward,
        episode_number: episode.episode_number,
    }
}
