//! Given steps for maintenance board scenarios.

use super::world::{BoardWorld, seeded_ticket};
use canteiro::access::Role;
use canteiro::board::domain::TaskStatus;
use eyre::eyre;
use rstest_bdd_macros::given;

#[given(r#"the board holds ticket "{id}" in column "{column}""#)]
fn board_holds_ticket(
    world: &mut BoardWorld,
    id: String,
    column: String,
) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre!("invalid column in scenario: {err}"))?;
    world.seed.push(seeded_ticket(&id, status)?);
    Ok(())
}

#[given(r#"the acting role is "{role}""#)]
fn acting_role(world: &mut BoardWorld, role: String) -> Result<(), eyre::Report> {
    let role =
        Role::try_from(role.as_str()).map_err(|err| eyre!("invalid role in scenario: {err}"))?;
    world.sign_in(role)
}
