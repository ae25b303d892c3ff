//! Error types for role and permission handling.

use super::{Action, Role};
use thiserror::Error;

/// Error returned while parsing a role name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Error returned while parsing an action name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown action: {0}")]
pub struct ParseActionError(pub String);

/// The acting role lacks the capability for the attempted action.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("role {role} may not perform {action}")]
pub struct PermissionDenied {
    /// Role that attempted the action.
    pub role: Role,
    /// Action that was refused.
    pub action: Action,
}
