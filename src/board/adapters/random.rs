//! UUID-backed identifier generator.

use crate::board::{domain::TaskId, ports::TaskIdGenerator};

/// Mints random v4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTaskIds;

impl TaskIdGenerator for RandomTaskIds {
    fn next_id(&self) -> TaskId {
        TaskId::random()
    }
}
