//! Identifier minting port.

use crate::board::domain::TaskId;

/// Source of fresh ticket identifiers.
///
/// Called only after form input has been validated, so a rejected form never
/// consumes an identifier.
pub trait TaskIdGenerator: Send + Sync {
    /// Returns an identifier not previously handed out by this generator.
    fn next_id(&self) -> TaskId;
}
