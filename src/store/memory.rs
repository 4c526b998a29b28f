//! In-memory task store (non-persistent).

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{seed, StoreError, TaskFilter, TaskStore};
use crate::task::{Task, TaskDraft, TaskPatch};

struct Inner {
    tasks: BTreeMap<i64, Task>,
    next_id: i64,
}

pub struct InMemoryTaskStore {
    inner: RwLock<Inner>,
}

impl InMemoryTaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                tasks: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with the mock dataset.
    pub async fn seeded() -> Self {
        let store = Self::new();
        store.reset().await;
        store
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list(&self, filter: TaskFilter) -> Vec<Task> {
        self.inner
            .read()
            .await
            .tasks
            .values()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    async fn get(&self, id: i64) -> Option<Task> {
        self.inner.read().await.tasks.get(&id).cloned()
    }

    async fn create(&self, draft: TaskDraft) -> Result<Task, StoreError> {
        if draft.title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let now = Utc::now();
        let task = Task {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            tags: draft.tags,
            assigned_to: draft.assigned_to,
            due_date: draft.due_date,
            created_at: now,
            updated_at: now,
        };
        inner.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, id: i64, patch: TaskPatch) -> Result<Option<Task>, StoreError> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(StoreError::EmptyTitle);
            }
        }

        let mut inner = self.inner.write().await;
        let task = match inner.tasks.get_mut(&id) {
            Some(task) => task,
            None => return Ok(None),
        };

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(tags) = patch.tags {
            task.tags = tags;
        }
        if let Some(assigned_to) = patch.assigned_to {
            task.assigned_to = assigned_to;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        task.updated_at = Utc::now();

        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: i64) -> bool {
        self.inner.write().await.tasks.remove(&id).is_some()
    }

    async fn reset(&self) {
        let mut inner = self.inner.write().await;
        inner.tasks.clear();
        inner.next_id = 1;
        for draft in seed::initial_tasks() {
            let id = inner.next_id;
            inner.next_id += 1;
            let now = Utc::now();
            inner.tasks.insert(
                id,
                Task {
                    id,
                    title: draft.title,
                    description: draft.description,
                    status: draft.status,
                    priority: draft.priority,
                    tags: draft.tags,
                    assigned_to: draft.assigned_to,
                    due_date: draft.due_date,
                    created_at: now,
                    updated_at: now,
                },
            );
        }
    }
}
