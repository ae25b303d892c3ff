mod domain_tests;
mod projection_tests;

use chrono::{DateTime, TimeZone, Utc};

use crate::board::domain::{
    PersistedTaskData, Task, TaskDetails, TaskDomainError, TaskId, TaskStatus, UrgencyLevel,
};

/// Builds a ticket with a fixed creation time for deterministic assertions.
fn seeded_task(
    id: &str,
    status: TaskStatus,
    urgency: UrgencyLevel,
) -> Result<Task, TaskDomainError> {
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id)?,
        details: TaskDetails::new("EMEB Juvina", format!("Chamado {id}"))?
            .with_location("Bloco B"),
        urgency,
        status,
        created_at: created_at(),
    }))
}

fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, 25, 10, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn task_id(raw: &str) -> Result<TaskId, TaskDomainError> {
    TaskId::new(raw)
}
