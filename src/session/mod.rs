//! Explicit application state for one signed-in user.
//!
//! [`Session`] owns the current board and ledger snapshots together with the
//! acting role, and applies [`SessionCommand`]s one at a time. Views read the
//! snapshots through shared references; nothing here is global.

mod command;
mod error;
mod state;
mod summary;

pub use command::{CommandOutcome, SessionCommand};
pub use error::{SessionError, SessionResult};
pub use state::Session;
pub use summary::DashboardSummary;
