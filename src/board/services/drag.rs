//! Drag-and-drop tracking for the board.

use crate::access::{Action, Role, can_perform};
use crate::board::domain::{TaskId, TaskStatus};

/// What a drop delivered: the dragged ticket and the column under the
/// pointer, either of which may be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    source: Option<TaskId>,
    target: Option<TaskStatus>,
}

impl DropEvent {
    /// Creates a drop event from typed parts.
    #[must_use]
    pub const fn new(source: Option<TaskId>, target: Option<TaskStatus>) -> Self {
        Self { source, target }
    }

    /// Creates a drop event from the raw drag payload and column key.
    ///
    /// An empty payload means no source; an unrecognised column means the
    /// ticket was released outside the board.
    #[must_use]
    pub fn from_raw(source: &str, column: &str) -> Self {
        Self {
            source: TaskId::new(source).ok(),
            target: TaskStatus::try_from(column).ok(),
        }
    }

    /// Returns the dragged ticket, if any.
    #[must_use]
    pub const fn source(&self) -> Option<&TaskId> {
        self.source.as_ref()
    }

    /// Returns the target column, if any.
    #[must_use]
    pub const fn target(&self) -> Option<TaskStatus> {
        self.target
    }
}

/// The single drag in progress, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    dragged: Option<TaskId>,
    hovered: Option<TaskStatus>,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts dragging `id`. Returns `false`, leaving the session idle, when
    /// `role` may not drag.
    pub fn start(&mut self, role: Role, id: TaskId) -> bool {
        if !can_perform(role, Action::DragReorder) {
            return false;
        }
        self.dragged = Some(id);
        self.hovered = None;
        true
    }

    /// Highlights `column` as the prospective target.
    pub fn hover(&mut self, role: Role, column: TaskStatus) -> bool {
        if !can_perform(role, Action::DragReorder) {
            return false;
        }
        self.hovered = Some(column);
        true
    }

    /// Clears the highlighted column when the pointer leaves it.
    pub const fn leave(&mut self) {
        self.hovered = None;
    }

    /// Releases the drag over `column` (or outside the board when `None`)
    /// and returns to idle.
    pub fn release(&mut self, column: Option<TaskStatus>) -> DropEvent {
        let event = DropEvent::new(self.dragged.take(), column);
        self.hovered = None;
        event
    }

    /// Abandons the drag without producing a drop.
    pub fn cancel(&mut self) {
        self.dragged = None;
        self.hovered = None;
    }

    /// Returns the ticket being dragged.
    #[must_use]
    pub const fn dragged(&self) -> Option<&TaskId> {
        self.dragged.as_ref()
    }

    /// Returns the highlighted column.
    #[must_use]
    pub const fn hovered(&self) -> Option<TaskStatus> {
        self.hovered
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.dragged.is_some()
    }
}
