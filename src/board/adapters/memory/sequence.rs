//! Counter-backed identifier generator.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::board::{domain::TaskId, ports::TaskIdGenerator};

/// Mints `"<prefix><n>"` identifiers from a monotonically increasing counter.
///
/// The numeric suffix keeps every identifier non-empty even with an empty
/// prefix.
#[derive(Debug)]
pub struct SequentialTaskIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialTaskIds {
    /// Creates a generator whose first identifier is `"<prefix><start>"`.
    #[must_use]
    pub fn new(prefix: impl Into<String>, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequentialTaskIds {
    fn default() -> Self {
        Self::new("task-", 1)
    }
}

impl TaskIdGenerator for SequentialTaskIds {
    fn next_id(&self) -> TaskId {
        let value = self.next.fetch_add(1, Ordering::Relaxed);
        TaskId::new(format!("{}{value}", self.prefix)).unwrap_or_else(|_| TaskId::random())
    }
}
