//! Aggregate figures for the dashboard landing page.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::{
    domain::UrgencyLevel,
    projection::{StatusCounts, UrgencyCounts, count_by_status, count_by_urgency, overdue_tasks},
    store::TaskStore,
};
use crate::measurement::{
    MeasurementLedger,
    domain::{MeasurementError, Money},
};

/// Dashboard figures derived from one board and one ledger snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Tickets on the board.
    pub total_tasks: usize,
    /// Tickets opened as emergencies.
    pub emergencies: usize,
    /// Tickets per column.
    pub by_status: StatusCounts,
    /// Tickets per urgency level.
    pub by_urgency: UrgencyCounts,
    /// Open tickets past their response target.
    pub overdue: usize,
    /// Value of inspector-measured quantities.
    pub total_measured: Money,
    /// Value of contracted quantities.
    pub total_contracted: Money,
    /// Measured value as a whole percentage of contracted value.
    pub progress_percent: u64,
}

impl DashboardSummary {
    /// Computes the figures at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::Overflow`] when money totals do not fit.
    pub fn compute(
        board: &TaskStore,
        ledger: &MeasurementLedger,
        now: DateTime<Utc>,
    ) -> Result<Self, MeasurementError> {
        let by_urgency = count_by_urgency(board);
        Ok(Self {
            total_tasks: board.len(),
            emergencies: by_urgency.get(UrgencyLevel::Emergencial),
            by_status: count_by_status(board),
            by_urgency,
            overdue: overdue_tasks(board, now).len(),
            total_measured: ledger.total_measured()?,
            total_contracted: ledger.total_contracted()?,
            progress_percent: ledger.progress_percent()?,
        })
    }
}
