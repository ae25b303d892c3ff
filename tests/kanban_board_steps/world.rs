//! World state for maintenance board scenarios.

use std::sync::Arc;

use canteiro::access::Role;
use canteiro::board::{
    adapters::memory::SequentialTaskIds,
    domain::{PersistedTaskData, Task, TaskDetails, TaskId, TaskStatus, UrgencyLevel},
    store::TaskStore,
};
use canteiro::session::{CommandOutcome, Session, SessionCommand, SessionResult};
use chrono::Utc;
use eyre::eyre;
use mockable::DefaultClock;
use rstest::fixture;

pub type TestSession = Session<SequentialTaskIds, DefaultClock>;

/// World state for board BDD tests.
#[derive(Default)]
pub struct BoardWorld {
    pub seed: Vec<Task>,
    pub session: Option<TestSession>,
    pub last_outcome: Option<SessionResult<CommandOutcome>>,
}

impl BoardWorld {
    /// Signs in as `role` over the seeded tickets.
    pub fn sign_in(&mut self, role: Role) -> Result<(), eyre::Report> {
        let board = TaskStore::from_tasks(self.seed.clone())?;
        let session = Session::new(
            role,
            Arc::new(SequentialTaskIds::new("os-", 100)),
            Arc::new(DefaultClock),
        )
        .with_board(board);
        self.session = Some(session);
        Ok(())
    }

    pub fn session(&self) -> Result<&TestSession, eyre::Report> {
        self.session
            .as_ref()
            .ok_or_else(|| eyre!("no role has been selected"))
    }

    /// Dispatches `command` and records the outcome for later assertions.
    pub fn dispatch(&mut self, command: SessionCommand) -> Result<(), eyre::Report> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| eyre!("no role has been selected"))?;
        self.last_outcome = Some(session.dispatch(command));
        Ok(())
    }
}

/// Builds a preventive ticket with the given identifier and column.
pub fn seeded_ticket(id: &str, status: TaskStatus) -> Result<Task, eyre::Report> {
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id)?,
        details: TaskDetails::new("EMEB Juvina", format!("Chamado {id}"))?,
        urgency: UrgencyLevel::Preventiva,
        status,
        created_at: Utc::now(),
    }))
}

#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
