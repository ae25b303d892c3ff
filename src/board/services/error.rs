//! Error and rejection types for board transitions.

use thiserror::Error;

use crate::access::PermissionDenied;
use crate::board::{
    domain::{TaskDomainError, TaskId, TaskStatus},
    store::TaskStoreError,
};

/// Service-level errors for board mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The acting role lacks the capability.
    #[error(transparent)]
    PermissionDenied(#[from] PermissionDenied),

    /// Form input failed validation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The store refused the change.
    #[error(transparent)]
    Store(#[from] TaskStoreError),

    /// The advance affordance does not exist for completed tickets.
    #[error("task {0} is already done")]
    TaskAlreadyDone(TaskId),
}

/// Result type for board planners.
pub type BoardResult<T> = Result<T, BoardError>;

/// Why a drop was ignored. A rejected drop leaves the board untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DropRejection {
    /// The acting role may not drag tickets.
    #[error(transparent)]
    PermissionDenied(#[from] PermissionDenied),

    /// No ticket identifier travelled with the drag.
    #[error("drop carried no task identifier")]
    MissingSource,

    /// The ticket was released outside any column.
    #[error("drop landed outside any column")]
    MissingTarget,

    /// The dragged identifier is not on the board.
    #[error("dropped task {0} is not on the board")]
    UnknownTask(TaskId),

    /// Backward moves are disabled by configuration.
    #[error("task {id} may not move back from {from} to {to}")]
    BackwardMove {
        /// Dragged ticket.
        id: TaskId,
        /// Column the ticket is in.
        from: TaskStatus,
        /// Column it was dropped on.
        to: TaskStatus,
    },
}
