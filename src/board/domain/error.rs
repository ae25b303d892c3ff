//! Error types for ticket validation and parsing.

use thiserror::Error;

/// Errors returned while constructing ticket values from form input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The ticket identifier is empty or whitespace.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The ticket title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The work-site name is empty after trimming.
    #[error("work-site name must not be empty")]
    EmptySiteName,
}

/// Error returned while parsing a board column name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing an urgency level name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown urgency level: {0}")]
pub struct ParseUrgencyLevelError(pub String);
