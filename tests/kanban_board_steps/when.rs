//! When steps for maintenance board scenarios.

use super::world::BoardWorld;
use canteiro::board::{
    domain::{TaskDetails, TaskId},
    services::DropEvent,
};
use canteiro::session::SessionCommand;
use rstest_bdd_macros::when;

#[when(r#"ticket "{id}" is dropped on column "{column}""#)]
fn ticket_dropped(world: &mut BoardWorld, id: String, column: String) -> Result<(), eyre::Report> {
    world.dispatch(SessionCommand::Drop(DropEvent::from_raw(&id, &column)))
}

#[when(r#"ticket "{id}" is deleted"#)]
fn ticket_deleted(world: &mut BoardWorld, id: String) -> Result<(), eyre::Report> {
    world.dispatch(SessionCommand::DeleteTask {
        id: TaskId::new(id)?,
    })
}

#[when(r#"a ticket titled "{title}" is opened for "{site}""#)]
fn ticket_opened(world: &mut BoardWorld, title: String, site: String) -> Result<(), eyre::Report> {
    world.dispatch(SessionCommand::CreateTask {
        details: TaskDetails::new(site, title)?,
        urgency: None,
    })
}

#[when(r#"ticket "{id}" is dragged and released outside the board"#)]
fn ticket_released_outside(world: &mut BoardWorld, id: String) -> Result<(), eyre::Report> {
    world.dispatch(SessionCommand::StartDrag {
        id: TaskId::new(id)?,
    })?;
    world.dispatch(SessionCommand::Release { column: None })
}
