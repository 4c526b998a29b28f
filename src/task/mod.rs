//! Task record data model.
//!
//! Statuses and priorities are closed enums serialized as `snake_case`
//! strings; serde rejects any other wire value, so a malformed record can
//! never reach the goal predicates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a task on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet
    Todo,
    /// Currently being worked on
    InProgress,
    /// Work finished
    Completed,
    /// Removed from the active board
    Archived,
}

impl TaskStatus {
    /// All statuses, in board order. Used to zero-fill observation buckets.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Archived,
    ];

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Archived => "archived",
        }
    }

    /// A task that is neither completed nor archived still needs attention.
    pub fn is_open(&self) -> bool {
        !matches!(self, TaskStatus::Completed | TaskStatus::Archived)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    /// All priorities, lowest first. Used to zero-fill observation buckets.
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Urgent,
    ];

    /// Wire name of the priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
            TaskPriority::Urgent => "urgent",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task record as stored on the board.
///
/// # Invariants
/// - `id` is unique and immutable once assigned by the store
/// - `title` is non-empty (enforced on create/update)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned sequential identifier
    pub id: i64,

    /// Short human-readable title (non-empty)
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Current status
    pub status: TaskStatus,

    /// Priority level
    pub priority: TaskPriority,

    /// Ordered tag list; duplicates are kept as given
    pub tags: Vec<String>,

    /// Assignee name, `None` when unassigned
    pub assigned_to: Option<String>,

    /// Deadline, `None` when the task has no due date
    pub due_date: Option<DateTime<Utc>>,

    /// Set by the store at creation
    pub created_at: DateTime<Utc>,

    /// Bumped by the store on every update
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Check whether any tag matches `needle` exactly, case-insensitively.
    pub fn has_tag(&self, needle: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(needle))
    }

    /// Check whether any tag contains `needle` as a case-insensitive substring.
    pub fn has_tag_containing(&self, needle: &str) -> bool {
        let needle = needle.to_ascii_lowercase();
        self.tags
            .iter()
            .any(|t| t.to_ascii_lowercase().contains(&needle))
    }
}

/// Payload for creating a task. The store fills in id and timestamps.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskDraft {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default = "default_status")]
    pub status: TaskStatus,

    #[serde(default = "default_priority")]
    pub priority: TaskPriority,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

fn default_status() -> TaskStatus {
    TaskStatus::Todo
}

fn default_priority() -> TaskPriority {
    TaskPriority::Medium
}

/// Partial update for a task. Absent fields are left unchanged.
///
/// `description`, `assigned_to` and `due_date` use a double `Option` so the
/// wire format can distinguish "leave as is" (field absent) from "clear"
/// (explicit null).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,

    pub status: Option<TaskStatus>,

    pub priority: Option<TaskPriority>,

    pub tags: Option<Vec<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub assigned_to: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

/// Wraps a present-but-possibly-null field in `Some`.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
