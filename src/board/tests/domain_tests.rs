//! Domain-focused tests for ticket values.

use super::{created_at, seeded_task};
use crate::board::domain::{
    ParseTaskStatusError, Task, TaskDetails, TaskDomainError, TaskId, TaskStatus, UrgencyLevel,
};
use chrono::TimeDelta;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
#[case("")]
#[case("   ")]
fn task_id_rejects_blank_tokens(#[case] raw: &str) {
    assert_eq!(TaskId::new(raw), Err(TaskDomainError::EmptyTaskId));
}

#[rstest]
fn task_id_keeps_opaque_token() -> eyre::Result<()> {
    let id = TaskId::new("k3j9x0a1b")?;
    eyre::ensure!(id.as_str() == "k3j9x0a1b");
    eyre::ensure!(id.to_string() == "k3j9x0a1b");
    Ok(())
}

#[rstest]
fn random_task_ids_differ() {
    assert_ne!(TaskId::random(), TaskId::random());
}

#[rstest]
fn task_id_deserialization_rejects_blank() {
    let result: Result<TaskId, _> = serde_json::from_str("\"  \"");
    assert!(result.is_err());
}

#[rstest]
#[case(r#"{"title": "   ", "site_name": "EMEB Juvina", "location": ""}"#)]
#[case(r#"{"title": "Goteira", "site_name": "", "location": "Bloco B"}"#)]
fn details_deserialization_rejects_blank_fields(#[case] json: &str) {
    let result: Result<TaskDetails, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[rstest]
fn details_deserialization_trims_like_the_form() -> eyre::Result<()> {
    let details: TaskDetails =
        serde_json::from_str(r#"{"title": " Goteira ", "site_name": "EMEB Juvina  "}"#)?;

    eyre::ensure!(details == TaskDetails::new("EMEB Juvina", "Goteira")?);
    eyre::ensure!(details.location().is_empty());
    Ok(())
}

#[rstest]
fn details_reject_blank_site_name() {
    assert_eq!(
        TaskDetails::new("  ", "Queda de disjuntor"),
        Err(TaskDomainError::EmptySiteName)
    );
}

#[rstest]
fn details_reject_blank_title() {
    assert_eq!(
        TaskDetails::new("EMEB Cuiabá", ""),
        Err(TaskDomainError::EmptyTitle)
    );
}

#[rstest]
fn details_trim_fields_and_default_location_to_empty() -> eyre::Result<()> {
    let details = TaskDetails::new("  EMEB Cuiabá ", " Queda de disjuntor ")?;
    eyre::ensure!(details.site_name() == "EMEB Cuiabá");
    eyre::ensure!(details.title() == "Queda de disjuntor");
    eyre::ensure!(details.location().is_empty());
    Ok(())
}

#[rstest]
fn opened_task_starts_in_a_fazer(clock: DefaultClock) -> eyre::Result<()> {
    let details = TaskDetails::new("EMEB Pantanal", "Pintura de fachada")?
        .with_location("Entrada Principal");
    let task = Task::open(TaskId::new("7")?, details, UrgencyLevel::Preventiva, &clock);

    eyre::ensure!(task.status() == TaskStatus::AFazer);
    eyre::ensure!(task.urgency() == UrgencyLevel::Preventiva);
    eyre::ensure!(task.site_name() == "EMEB Pantanal");
    eyre::ensure!(task.location() == "Entrada Principal");
    Ok(())
}

#[rstest]
fn with_status_changes_only_the_status() -> eyre::Result<()> {
    let task = seeded_task("1", TaskStatus::AFazer, UrgencyLevel::Emergencial)?;
    let moved = task.with_status(TaskStatus::Concluido);

    eyre::ensure!(moved.status() == TaskStatus::Concluido);
    eyre::ensure!(moved.id() == task.id());
    eyre::ensure!(moved.details() == task.details());
    eyre::ensure!(moved.urgency() == task.urgency());
    eyre::ensure!(moved.created_at() == task.created_at());
    eyre::ensure!(task.status() == TaskStatus::AFazer);
    Ok(())
}

#[rstest]
#[case(TaskStatus::AFazer, Some(TaskStatus::EmExecucao))]
#[case(TaskStatus::EmExecucao, Some(TaskStatus::Concluido))]
#[case(TaskStatus::Concluido, None)]
fn next_status_is_single_step_forward(
    #[case] from: TaskStatus,
    #[case] expected: Option<TaskStatus>,
) {
    assert_eq!(from.next(), expected);
}

#[rstest]
#[case(TaskStatus::Concluido, TaskStatus::AFazer, true)]
#[case(TaskStatus::EmExecucao, TaskStatus::AFazer, true)]
#[case(TaskStatus::AFazer, TaskStatus::Concluido, false)]
#[case(TaskStatus::EmExecucao, TaskStatus::EmExecucao, false)]
fn backward_detection_follows_column_order(
    #[case] from: TaskStatus,
    #[case] to: TaskStatus,
    #[case] expected: bool,
) {
    assert_eq!(from.is_backward_to(to), expected);
}

#[rstest]
fn status_parsing_rejects_unknown_columns() {
    assert_eq!(
        TaskStatus::try_from("ARQUIVADO"),
        Err(ParseTaskStatusError("ARQUIVADO".to_owned()))
    );
    assert_eq!(TaskStatus::try_from("em_execucao"), Ok(TaskStatus::EmExecucao));
}

#[rstest]
#[case(UrgencyLevel::Emergencial, TimeDelta::hours(2))]
#[case(UrgencyLevel::Urgencia, TimeDelta::days(1))]
#[case(UrgencyLevel::Preventiva, TimeDelta::days(15))]
fn urgency_response_targets(#[case] level: UrgencyLevel, #[case] expected: TimeDelta) {
    assert_eq!(level.response_target(), expected);
}

#[rstest]
fn emergency_ticket_is_overdue_after_two_hours() -> eyre::Result<()> {
    let task = seeded_task("1", TaskStatus::EmExecucao, UrgencyLevel::Emergencial)?;
    let deadline = created_at() + TimeDelta::hours(2);

    eyre::ensure!(task.response_deadline() == deadline);
    eyre::ensure!(!task.is_overdue(deadline));
    eyre::ensure!(task.is_overdue(deadline + TimeDelta::minutes(1)));
    Ok(())
}

#[rstest]
fn completed_ticket_is_never_overdue() -> eyre::Result<()> {
    let task = seeded_task("3", TaskStatus::Concluido, UrgencyLevel::Emergencial)?;
    eyre::ensure!(!task.is_overdue(created_at() + TimeDelta::days(365)));
    Ok(())
}

#[rstest]
fn task_round_trips_through_json() -> eyre::Result<()> {
    let task = seeded_task("2", TaskStatus::AFazer, UrgencyLevel::Urgencia)?;
    let json = serde_json::to_value(&task)?;

    eyre::ensure!(json["status"] == "A_FAZER");
    eyre::ensure!(json["urgency"] == "URGENCIA");
    let decoded: Task = serde_json::from_value(json)?;
    eyre::ensure!(decoded == task);
    Ok(())
}
