//! Command interface between the host and the session.

use crate::board::{
    domain::{TaskDetails, TaskId, TaskStatus, UrgencyLevel},
    services::{BoardIntent, DropEvent, DropRejection},
};
use crate::measurement::{
    MeasurementField,
    domain::{Quantity, SinapiCode},
};

/// A discrete user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Submit the ticket creation form.
    CreateTask {
        /// Validated form fields.
        details: TaskDetails,
        /// Selected urgency; `None` uses the configured default.
        urgency: Option<UrgencyLevel>,
    },
    /// Press the advance button on a card.
    AdvanceTask {
        /// Ticket to advance.
        id: TaskId,
    },
    /// Pick up a card.
    StartDrag {
        /// Ticket being dragged.
        id: TaskId,
    },
    /// Drag over a column.
    HoverColumn {
        /// Column under the pointer.
        column: TaskStatus,
    },
    /// Drag out of the highlighted column.
    LeaveColumn,
    /// Release the dragged card over `column`, or outside the board.
    Release {
        /// Column under the pointer, if any.
        column: Option<TaskStatus>,
    },
    /// Abandon the drag.
    CancelDrag,
    /// Deliver a drop assembled by the host from a raw drag payload.
    Drop(DropEvent),
    /// Press the delete button on a card.
    DeleteTask {
        /// Ticket to delete.
        id: TaskId,
    },
    /// Edit a quantity in the technical measurement table.
    RecordMeasurement {
        /// Quantity being edited.
        field: MeasurementField,
        /// Contract line.
        code: SinapiCode,
        /// New value.
        quantity: Quantity,
    },
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The board moved to a new snapshot.
    Applied(BoardIntent),
    /// The ledger moved to a new snapshot.
    MeasurementRecorded(SinapiCode),
    /// Only the drag state changed.
    DragUpdated,
    /// The command referenced nothing that could change; snapshots kept.
    Unchanged,
    /// The drop was ignored.
    Ignored(DropRejection),
}
