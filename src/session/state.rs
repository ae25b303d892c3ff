//! The session state container and its command dispatcher.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info};

use super::{CommandOutcome, DashboardSummary, SessionCommand, SessionResult};
use crate::access::Role;
use crate::board::{
    config::BoardConfig,
    domain::{TaskDetails, TaskId, UrgencyLevel},
    ports::TaskIdGenerator,
    services::{
        BoardError, BoardIntent, DragSession, DropEvent, apply_intent, plan_advance, plan_create,
        plan_delete, plan_drop,
    },
    store::TaskStore,
};
use crate::measurement::{
    MeasurementField, MeasurementLedger,
    domain::{MeasurementError, Quantity, SinapiCode},
};

/// Application state for one signed-in user.
#[derive(Debug, Clone)]
pub struct Session<G, C>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    role: Role,
    config: BoardConfig,
    board: TaskStore,
    ledger: MeasurementLedger,
    drag: DragSession,
    ids: Arc<G>,
    clock: Arc<C>,
}

impl<G, C> Session<G, C>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    /// Signs in as `role` with an empty board and ledger.
    #[must_use]
    pub fn new(role: Role, ids: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            role,
            config: BoardConfig::default(),
            board: TaskStore::new(),
            ledger: MeasurementLedger::default(),
            drag: DragSession::new(),
            ids,
            clock,
        }
    }

    /// Replaces the board settings.
    #[must_use]
    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    /// Starts from an existing board snapshot.
    #[must_use]
    pub fn with_board(mut self, board: TaskStore) -> Self {
        self.board = board;
        self
    }

    /// Starts from an existing ledger snapshot.
    #[must_use]
    pub fn with_ledger(mut self, ledger: MeasurementLedger) -> Self {
        self.ledger = ledger;
        self
    }

    /// Signs in again as `role`, keeping the board and ledger. Any drag in
    /// progress is abandoned.
    pub fn reselect_role(&mut self, role: Role) {
        info!(from = %self.role, to = %role, "role reselected");
        self.role = role;
        self.drag.cancel();
    }

    /// Returns the acting role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the board settings.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the current board snapshot.
    #[must_use]
    pub const fn board(&self) -> &TaskStore {
        &self.board
    }

    /// Returns the current ledger snapshot.
    #[must_use]
    pub const fn ledger(&self) -> &MeasurementLedger {
        &self.ledger
    }

    /// Returns the drag in progress, if any.
    #[must_use]
    pub const fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// Computes the dashboard figures for the current snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::Overflow`] when money totals do not fit.
    pub fn summary(&self) -> Result<DashboardSummary, MeasurementError> {
        DashboardSummary::compute(&self.board, &self.ledger, self.clock.utc())
    }

    /// Applies one user interaction.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`](super::SessionError) for refused or invalid
    /// board and measurement commands. Ignored drops and unknown ticket
    /// identifiers are outcomes, not errors.
    pub fn dispatch(&mut self, command: SessionCommand) -> SessionResult<CommandOutcome> {
        match command {
            SessionCommand::CreateTask { details, urgency } => self.create_task(details, urgency),
            SessionCommand::AdvanceTask { id } => self.advance_task(&id),
            SessionCommand::StartDrag { id } => {
                Ok(self.drag_outcome(|drag, role| drag.start(role, id)))
            }
            SessionCommand::HoverColumn { column } => {
                Ok(self.drag_outcome(|drag, role| drag.hover(role, column)))
            }
            SessionCommand::LeaveColumn => {
                self.drag.leave();
                Ok(CommandOutcome::DragUpdated)
            }
            SessionCommand::Release { column } => {
                let event = self.drag.release(column);
                self.drop_task(&event)
            }
            SessionCommand::CancelDrag => {
                self.drag.cancel();
                Ok(CommandOutcome::DragUpdated)
            }
            SessionCommand::Drop(event) => self.drop_task(&event),
            SessionCommand::DeleteTask { id } => self.delete_task(&id),
            SessionCommand::RecordMeasurement {
                field,
                code,
                quantity,
            } => self.record_measurement(field, code, quantity),
        }
    }

    fn create_task(
        &mut self,
        details: TaskDetails,
        urgency: Option<UrgencyLevel>,
    ) -> SessionResult<CommandOutcome> {
        let level = urgency.unwrap_or(self.config.default_urgency);
        let intent = plan_create(self.role, details, level, &*self.ids, &*self.clock)?;
        self.apply(intent)
    }

    fn advance_task(&mut self, id: &TaskId) -> SessionResult<CommandOutcome> {
        match plan_advance(self.role, &self.board, id)? {
            Some(intent) => self.apply(intent),
            None => Ok(self.unchanged(id)),
        }
    }

    fn drop_task(&mut self, event: &DropEvent) -> SessionResult<CommandOutcome> {
        match plan_drop(self.role, &self.board, event, &self.config) {
            Ok(intent) => self.apply(intent),
            Err(rejection) => {
                debug!(role = %self.role, %rejection, "drop ignored");
                Ok(CommandOutcome::Ignored(rejection))
            }
        }
    }

    fn delete_task(&mut self, id: &TaskId) -> SessionResult<CommandOutcome> {
        match plan_delete(self.role, &self.board, id)? {
            Some(intent) => self.apply(intent),
            None => Ok(self.unchanged(id)),
        }
    }

    fn record_measurement(
        &mut self,
        field: MeasurementField,
        code: SinapiCode,
        quantity: Quantity,
    ) -> SessionResult<CommandOutcome> {
        self.ledger = self.ledger.record(self.role, field, &code, quantity)?;
        info!(role = %self.role, %code, "measurement recorded");
        Ok(CommandOutcome::MeasurementRecorded(code))
    }

    fn drag_outcome(
        &mut self,
        step: impl FnOnce(&mut DragSession, Role) -> bool,
    ) -> CommandOutcome {
        if step(&mut self.drag, self.role) {
            CommandOutcome::DragUpdated
        } else {
            debug!(role = %self.role, "drag refused");
            CommandOutcome::Unchanged
        }
    }

    fn apply(&mut self, intent: BoardIntent) -> SessionResult<CommandOutcome> {
        let next = apply_intent(&self.board, intent.clone()).map_err(BoardError::from)?;
        if next.is_same_snapshot(&self.board) {
            return Ok(self.unchanged(intent.task_id()));
        }
        self.board = next;
        info!(role = %self.role, task_id = %intent.task_id(), "board updated");
        Ok(CommandOutcome::Applied(intent))
    }

    fn unchanged(&self, id: &TaskId) -> CommandOutcome {
        debug!(role = %self.role, task_id = %id, "command left the board unchanged");
        CommandOutcome::Unchanged
    }
}
