//! Domain model for maintenance tickets.
//!
//! Tickets are opened against a work site with a fixed urgency, move across
//! three board columns, and are eventually deleted. Everything here is pure
//! data and validation; ordering and ownership live in the store.

mod error;
mod ids;
mod status;
mod task;
mod urgency;

pub use error::{ParseTaskStatusError, ParseUrgencyLevelError, TaskDomainError};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, TaskDetails};
pub use urgency::UrgencyLevel;
