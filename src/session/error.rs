//! Session-level errors.

use thiserror::Error;

use crate::board::services::BoardError;
use crate::measurement::domain::MeasurementError;

/// Errors returned while dispatching a command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A board command failed.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// A measurement command failed.
    #[error(transparent)]
    Measurement(#[from] MeasurementError),
}

/// Result type for session dispatch.
pub type SessionResult<T> = Result<T, SessionError>;
