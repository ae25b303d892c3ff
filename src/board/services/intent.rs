//! Board intents and the reducer that applies them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{
    domain::{Task, TaskId, TaskStatus},
    store::{TaskStore, TaskStoreError},
};

/// A planned change to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardIntent {
    /// Put a freshly opened ticket at the head of the board.
    AddTask(Task),
    /// Move a ticket to a column.
    SetStatus {
        /// Ticket to move.
        id: TaskId,
        /// Destination column.
        status: TaskStatus,
    },
    /// Remove a ticket.
    DeleteTask {
        /// Ticket to remove.
        id: TaskId,
    },
}

impl BoardIntent {
    /// Returns the identifier of the ticket the intent targets.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        match self {
            Self::AddTask(task) => task.id(),
            Self::SetStatus { id, .. } | Self::DeleteTask { id } => id,
        }
    }
}

/// Applies `intent` to `store`, returning the next snapshot.
///
/// # Errors
///
/// Returns [`TaskStoreError::DuplicateTaskId`] when an added ticket reuses
/// an identifier already on the board.
pub fn apply_intent(store: &TaskStore, intent: BoardIntent) -> Result<TaskStore, TaskStoreError> {
    match intent {
        BoardIntent::AddTask(task) => {
            debug!(task_id = %task.id(), urgency = %task.urgency(), "adding task");
            store.add_task(task)
        }
        BoardIntent::SetStatus { id, status } => {
            debug!(task_id = %id, %status, "setting task status");
            Ok(store.update_status(&id, status))
        }
        BoardIntent::DeleteTask { id } => {
            debug!(task_id = %id, "deleting task");
            Ok(store.delete_task(&id))
        }
    }
}
