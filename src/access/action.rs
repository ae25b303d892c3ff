//! Capabilities and dashboard sections subject to the permission policy.

use super::ParseActionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mutation a role may or may not be allowed to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Open a new maintenance ticket.
    CreateTask,
    /// Drag a ticket between board columns.
    DragReorder,
    /// Move a ticket one step forward with the advance button.
    AdvanceStatus,
    /// Remove a ticket from the board.
    DeleteTask,
    /// Record the inspector-measured quantity of a SINAPI item.
    EditMeasurementAsFiscal,
    /// Record the contractor-executed quantity of a SINAPI item.
    EditMeasurementAsEmpresa,
}

impl Action {
    /// Every action known to the policy.
    pub const ALL: [Self; 6] = [
        Self::CreateTask,
        Self::DragReorder,
        Self::AdvanceStatus,
        Self::DeleteTask,
        Self::EditMeasurementAsFiscal,
        Self::EditMeasurementAsEmpresa,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateTask => "CREATE_TASK",
            Self::DragReorder => "DRAG_REORDER",
            Self::AdvanceStatus => "ADVANCE_STATUS",
            Self::DeleteTask => "DELETE_TASK",
            Self::EditMeasurementAsFiscal => "EDIT_MEASUREMENT_AS_FISCAL",
            Self::EditMeasurementAsEmpresa => "EDIT_MEASUREMENT_AS_EMPRESA",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Action {
    type Error = ParseActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == normalized)
            .ok_or_else(|| ParseActionError(value.to_owned()))
    }
}

/// Top-level dashboard area gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Executive overview with aggregate figures.
    Dashboard,
    /// SINAPI measurement tables.
    Measurements,
    /// Maintenance and urgency board.
    Maintenance,
    /// Photo evidence reports.
    PhotoReports,
    /// Geo-audit monitoring map.
    AuditMap,
}

impl Section {
    /// Every section, in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Measurements,
        Self::Maintenance,
        Self::PhotoReports,
        Self::AuditMap,
    ];
}
