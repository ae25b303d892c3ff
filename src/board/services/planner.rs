//! Intent planners: permission check first, then the transition rule.

use mockable::Clock;

use super::{BoardError, BoardIntent, BoardResult, DropEvent, DropRejection};
use crate::access::{Action, Role, require};
use crate::board::{
    config::{BackwardDropPolicy, BoardConfig},
    domain::{Task, TaskDetails, TaskId, UrgencyLevel},
    ports::TaskIdGenerator,
    store::TaskStore,
};

/// Plans opening a ticket from validated form input.
///
/// The identifier is minted only once the role has been cleared, so refused
/// attempts never consume one.
///
/// # Errors
///
/// Returns [`BoardError::PermissionDenied`] when `role` may not create
/// tickets.
pub fn plan_create(
    role: Role,
    details: TaskDetails,
    urgency: UrgencyLevel,
    ids: &impl TaskIdGenerator,
    clock: &impl Clock,
) -> BoardResult<BoardIntent> {
    require(role, Action::CreateTask)?;
    let task = Task::open(ids.next_id(), details, urgency, clock);
    Ok(BoardIntent::AddTask(task))
}

/// Plans a single forward step for ticket `id`.
///
/// Returns `Ok(None)` when `id` is not on the board.
///
/// # Errors
///
/// Returns [`BoardError::PermissionDenied`] when `role` may not advance
/// tickets and [`BoardError::TaskAlreadyDone`] when the ticket is in the
/// final column.
pub fn plan_advance(
    role: Role,
    store: &TaskStore,
    id: &TaskId,
) -> BoardResult<Option<BoardIntent>> {
    require(role, Action::AdvanceStatus)?;
    let Some(task) = store.get(id) else {
        return Ok(None);
    };
    let status = task
        .status()
        .next()
        .ok_or_else(|| BoardError::TaskAlreadyDone(id.clone()))?;
    Ok(Some(BoardIntent::SetStatus {
        id: id.clone(),
        status,
    }))
}

/// Plans the status change for a drop.
///
/// Drops are permissive: the ticket jumps straight to the target column,
/// skipping or reversing the linear order, unless `config` denies backward
/// moves.
///
/// # Errors
///
/// Returns the [`DropRejection`] explaining why the drop is ignored.
pub fn plan_drop(
    role: Role,
    store: &TaskStore,
    event: &DropEvent,
    config: &BoardConfig,
) -> Result<BoardIntent, DropRejection> {
    require(role, Action::DragReorder)?;
    let id = event.source().ok_or(DropRejection::MissingSource)?;
    let target = event.target().ok_or(DropRejection::MissingTarget)?;
    let task = store
        .get(id)
        .ok_or_else(|| DropRejection::UnknownTask(id.clone()))?;

    if config.backward_drops == BackwardDropPolicy::Deny && task.status().is_backward_to(target) {
        return Err(DropRejection::BackwardMove {
            id: id.clone(),
            from: task.status(),
            to: target,
        });
    }

    Ok(BoardIntent::SetStatus {
        id: id.clone(),
        status: target,
    })
}

/// Plans removing ticket `id`. Returns `Ok(None)` when it is not on the
/// board.
///
/// # Errors
///
/// Returns [`BoardError::PermissionDenied`] when `role` may not delete
/// tickets.
pub fn plan_delete(role: Role, store: &TaskStore, id: &TaskId) -> BoardResult<Option<BoardIntent>> {
    require(role, Action::DeleteTask)?;
    if !store.contains(id) {
        return Ok(None);
    }
    Ok(Some(BoardIntent::DeleteTask { id: id.clone() }))
}
