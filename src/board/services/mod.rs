//! Board transition engine.
//!
//! Planners turn a user interaction into a [`BoardIntent`] after checking
//! the permission policy; [`apply_intent`] is the single reducer that turns
//! an intent into the next [`TaskStore`](crate::board::store::TaskStore)
//! snapshot. Planners never touch the store and the reducer never checks
//! permissions.

mod drag;
mod error;
mod intent;
mod planner;

pub use drag::{DragSession, DropEvent};
pub use error::{BoardError, BoardResult, DropRejection};
pub use intent::{BoardIntent, apply_intent};
pub use planner::{plan_advance, plan_create, plan_delete, plan_drop};
