//! Task storage with a pluggable backend.
//!
//! The environment only ever reads full snapshots; predicates never see the
//! store directly. The in-memory backend is the only one shipped; the
//! environment makes no persistence guarantees across restarts.

mod memory;
pub mod seed;

pub use memory::InMemoryTaskStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::task::{Task, TaskDraft, TaskPatch, TaskPriority, TaskStatus};

/// Errors from store mutations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Task title cannot be empty")]
    EmptyTitle,
}

/// Optional filters for listing tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl TaskFilter {
    fn matches(&self, task: &Task) -> bool {
        self.status.map_or(true, |s| task.status == s)
            && self.priority.map_or(true, |p| task.priority == p)
    }
}

/// Task store trait - implemented by all storage backends.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// List tasks matching the filter, ordered by ascending id.
    async fn list(&self, filter: TaskFilter) -> Vec<Task>;

    /// Full unfiltered snapshot, ordered by ascending id.
    async fn snapshot(&self) -> Vec<Task> {
        self.list(TaskFilter::default()).await
    }

    /// Get a single task by id.
    async fn get(&self, id: i64) -> Option<Task>;

    /// Create a new task. Assigns the next id and both timestamps.
    async fn create(&self, draft: TaskDraft) -> Result<Task, StoreError>;

    /// Apply a partial update. Returns `None` if the task does not exist.
    async fn update(&self, id: i64, patch: TaskPatch) -> Result<Option<Task>, StoreError>;

    /// Delete a task. Returns whether it existed.
    async fn delete(&self, id: i64) -> bool;

    /// Drop all tasks and reseed the initial mock dataset.
    async fn reset(&self);
}
