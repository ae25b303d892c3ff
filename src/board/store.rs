//! Immutable snapshots of the ticket collection.
//!
//! The store is the sole owner of tickets. Every operation leaves `self`
//! untouched and returns the next snapshot, so views rendered from an older
//! snapshot never observe a half-applied change. Order is most-recent-first:
//! new tickets go to the head and status changes never reorder.

use std::sync::Arc;

use thiserror::Error;

use super::domain::{Task, TaskId, TaskStatus};

/// Errors returned by store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// A ticket with the same identifier is already on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),
}

/// Ordered, immutable ticket collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Arc<[Task]>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from tickets already in display order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTaskId`] for the first identifier
    /// that appears twice.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self, TaskStoreError> {
        let mut collected: Vec<Task> = Vec::new();
        for task in tasks {
            if collected.iter().any(|existing| existing.id() == task.id()) {
                return Err(TaskStoreError::DuplicateTaskId(task.id().clone()));
            }
            collected.push(task);
        }
        Ok(Self {
            tasks: collected.into(),
        })
    }

    /// Returns a snapshot with `task` inserted at the head.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTaskId`] when the identifier is
    /// already present; `self` is unchanged.
    pub fn add_task(&self, task: Task) -> Result<Self, TaskStoreError> {
        if self.contains(task.id()) {
            return Err(TaskStoreError::DuplicateTaskId(task.id().clone()));
        }
        let tasks: Vec<Task> = std::iter::once(task)
            .chain(self.tasks.iter().cloned())
            .collect();
        Ok(Self {
            tasks: tasks.into(),
        })
    }

    /// Returns a snapshot where the ticket `id` is in `status`.
    ///
    /// Any status may be set from any status. An unknown `id`, or a ticket
    /// already in `status`, yields the same snapshot.
    #[must_use]
    pub fn update_status(&self, id: &TaskId, status: TaskStatus) -> Self {
        let needs_change = self
            .get(id)
            .is_some_and(|task| task.status() != status);
        if !needs_change {
            return self.clone();
        }
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .map(|task| {
                if task.id() == id {
                    task.with_status(status)
                } else {
                    task.clone()
                }
            })
            .collect();
        Self {
            tasks: tasks.into(),
        }
    }

    /// Returns a snapshot without the ticket `id`. An unknown `id` yields the
    /// same snapshot.
    #[must_use]
    pub fn delete_task(&self, id: &TaskId) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect();
        Self {
            tasks: tasks.into(),
        }
    }

    /// Looks up a ticket by identifier.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns `true` when a ticket with `id` is present.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the tickets in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Iterates over the tickets in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Returns the number of tickets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the board holds no tickets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns `true` when both values share the same underlying snapshot.
    #[must_use]
    pub fn is_same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }
}

impl<'a> IntoIterator for &'a TaskStore {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
