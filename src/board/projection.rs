//! Derived views over a store snapshot.
//!
//! Recomputed from scratch on every change; nothing here caches.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{Task, TaskStatus, UrgencyLevel};
use super::store::TaskStore;

/// Tickets of one board column, in store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn<'a> {
    /// Column status.
    pub status: TaskStatus,
    /// Tickets in this column.
    pub tasks: Vec<&'a Task>,
}

impl BoardColumn<'_> {
    /// Returns the column heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.status.title()
    }

    /// Returns the number of tickets in the column.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}

/// Ticket counts per column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Tickets waiting to start.
    pub a_fazer: usize,
    /// Tickets in progress.
    pub em_execucao: usize,
    /// Finished tickets.
    pub concluido: usize,
}

impl StatusCounts {
    /// Returns the count for `status`.
    #[must_use]
    pub const fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::AFazer => self.a_fazer,
            TaskStatus::EmExecucao => self.em_execucao,
            TaskStatus::Concluido => self.concluido,
        }
    }

    /// Returns the total across all columns.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.a_fazer + self.em_execucao + self.concluido
    }
}

/// Ticket counts per urgency level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UrgencyCounts {
    /// Emergency tickets.
    pub emergencial: usize,
    /// Urgent tickets.
    pub urgencia: usize,
    /// Preventive tickets.
    pub preventiva: usize,
}

impl UrgencyCounts {
    /// Returns the count for `level`.
    #[must_use]
    pub const fn get(&self, level: UrgencyLevel) -> usize {
        match level {
            UrgencyLevel::Emergencial => self.emergencial,
            UrgencyLevel::Urgencia => self.urgencia,
            UrgencyLevel::Preventiva => self.preventiva,
        }
    }
}

/// Groups tickets into the three board columns, left to right.
///
/// Within a column, tickets keep their store order.
#[must_use]
pub fn group_by_status(store: &TaskStore) -> [BoardColumn<'_>; 3] {
    TaskStatus::ALL.map(|status| BoardColumn {
        status,
        tasks: store.iter().filter(|task| task.status() == status).collect(),
    })
}

/// Counts tickets per column.
#[must_use]
pub fn count_by_status(store: &TaskStore) -> StatusCounts {
    let [todo, doing, done] = group_by_status(store);
    StatusCounts {
        a_fazer: todo.count(),
        em_execucao: doing.count(),
        concluido: done.count(),
    }
}

/// Counts tickets per urgency level.
#[must_use]
pub fn count_by_urgency(store: &TaskStore) -> UrgencyCounts {
    store
        .iter()
        .fold(UrgencyCounts::default(), |mut counts, task| {
            match task.urgency() {
                UrgencyLevel::Emergencial => counts.emergencial += 1,
                UrgencyLevel::Urgencia => counts.urgencia += 1,
                UrgencyLevel::Preventiva => counts.preventiva += 1,
            }
            counts
        })
}

/// Lists open tickets whose response target has passed at `now`.
#[must_use]
pub fn overdue_tasks(store: &TaskStore, now: DateTime<Utc>) -> Vec<&Task> {
    store.iter().filter(|task| task.is_overdue(now)).collect()
}
