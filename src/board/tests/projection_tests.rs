//! Unit tests for derived board views.

use super::{created_at, seeded_task, task_id};
use crate::board::{
    domain::{TaskStatus, UrgencyLevel},
    projection::{count_by_status, count_by_urgency, group_by_status, overdue_tasks},
    store::TaskStore,
};
use chrono::TimeDelta;
use rstest::{fixture, rstest};

#[fixture]
fn seeded_store() -> Result<TaskStore, eyre::Report> {
    Ok(TaskStore::from_tasks([
        seeded_task("5", TaskStatus::AFazer, UrgencyLevel::Emergencial)?,
        seeded_task("1", TaskStatus::EmExecucao, UrgencyLevel::Emergencial)?,
        seeded_task("2", TaskStatus::AFazer, UrgencyLevel::Urgencia)?,
        seeded_task("3", TaskStatus::Concluido, UrgencyLevel::Preventiva)?,
    ])?)
}

#[rstest]
fn grouping_keeps_store_order_within_columns(
    seeded_store: Result<TaskStore, eyre::Report>,
) -> eyre::Result<()> {
    let store = seeded_store?;
    let [todo, doing, done] = group_by_status(&store);

    let todo_ids: Vec<&str> = todo.tasks.iter().map(|task| task.id().as_str()).collect();
    eyre::ensure!(todo.status == TaskStatus::AFazer);
    eyre::ensure!(todo_ids == ["5", "2"]);
    eyre::ensure!(doing.count() == 1);
    eyre::ensure!(done.count() == 1);
    eyre::ensure!(done.title() == "Concluídos");
    Ok(())
}

#[rstest]
fn new_ticket_lands_first_in_a_fazer(
    seeded_store: Result<TaskStore, eyre::Report>,
) -> eyre::Result<()> {
    let store =
        seeded_store?.add_task(seeded_task("9", TaskStatus::AFazer, UrgencyLevel::Preventiva)?)?;
    let [todo, doing, done] = group_by_status(&store);
    let new_id = task_id("9")?;

    eyre::ensure!(todo.tasks.first().map(|task| task.id()) == Some(&new_id));
    eyre::ensure!(!doing.tasks.iter().any(|task| task.id() == &new_id));
    eyre::ensure!(!done.tasks.iter().any(|task| task.id() == &new_id));
    Ok(())
}

#[rstest]
fn counts_follow_grouping(seeded_store: Result<TaskStore, eyre::Report>) -> eyre::Result<()> {
    let store = seeded_store?;
    let counts = count_by_status(&store);

    eyre::ensure!(counts.get(TaskStatus::AFazer) == 2);
    eyre::ensure!(counts.get(TaskStatus::EmExecucao) == 1);
    eyre::ensure!(counts.get(TaskStatus::Concluido) == 1);
    eyre::ensure!(counts.total() == store.len());
    Ok(())
}

#[rstest]
fn urgency_counts(seeded_store: Result<TaskStore, eyre::Report>) -> eyre::Result<()> {
    let counts = count_by_urgency(&seeded_store?);
    eyre::ensure!(counts.get(UrgencyLevel::Emergencial) == 2);
    eyre::ensure!(counts.get(UrgencyLevel::Urgencia) == 1);
    eyre::ensure!(counts.get(UrgencyLevel::Preventiva) == 1);
    Ok(())
}

#[rstest]
fn overdue_lists_open_tickets_past_target(
    seeded_store: Result<TaskStore, eyre::Report>,
) -> eyre::Result<()> {
    let store = seeded_store?;
    let now = created_at() + TimeDelta::hours(3);
    let overdue: Vec<&str> = overdue_tasks(&store, now)
        .into_iter()
        .map(|task| task.id().as_str())
        .collect();

    eyre::ensure!(overdue == ["5", "1"]);
    Ok(())
}

#[rstest]
fn empty_store_projects_empty_columns() {
    let store = TaskStore::new();
    assert!(group_by_status(&store).iter().all(|column| column.count() == 0));
    assert_eq!(count_by_status(&store).total(), 0);
}
