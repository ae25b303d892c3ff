//! Then steps for maintenance board scenarios.

use super::world::BoardWorld;
use canteiro::board::{
    domain::{TaskId, TaskStatus},
    projection::group_by_status,
};
use canteiro::session::CommandOutcome;
use eyre::eyre;
use rstest_bdd_macros::then;

#[then(r#"ticket "{id}" is in column "{column}""#)]
fn ticket_in_column(world: &BoardWorld, id: String, column: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre!("invalid column in scenario: {err}"))?;
    let task_id = TaskId::new(id)?;
    let task = world
        .session()?
        .board()
        .get(&task_id)
        .ok_or_else(|| eyre!("ticket {task_id} is not on the board"))?;

    if task.status() != expected {
        return Err(eyre!(
            "expected ticket {task_id} in {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then("the drop is ignored")]
fn drop_is_ignored(world: &BoardWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre!("missing dispatch outcome"))?;

    match outcome {
        Ok(CommandOutcome::Ignored(_)) => Ok(()),
        other => Err(eyre!("expected an ignored drop, got {other:?}")),
    }
}

#[then("the board holds {count:u64} tickets")]
fn board_holds(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let actual = u64::try_from(world.session()?.board().len())?;
    eyre::ensure!(actual == count, "expected {count} tickets, found {actual}");
    Ok(())
}

#[then(r#"the first pending ticket is titled "{title}""#)]
fn first_pending_titled(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let board = world.session()?.board();
    let [pending, _, _] = group_by_status(board);
    let first = pending
        .tasks
        .first()
        .ok_or_else(|| eyre!("the pending column is empty"))?;
    eyre::ensure!(
        first.title() == title,
        "expected {title:?} first, found {:?}",
        first.title()
    );
    Ok(())
}

#[then(r#"column "{column}" holds {count:u64} tickets"#)]
fn column_holds(world: &BoardWorld, column: String, count: u64) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre!("invalid column in scenario: {err}"))?;
    let actual = world
        .session()?
        .board()
        .iter()
        .filter(|task| task.status() == status)
        .count();
    let actual = u64::try_from(actual)?;
    eyre::ensure!(actual == count, "expected {count} tickets in {status}, found {actual}");
    Ok(())
}
