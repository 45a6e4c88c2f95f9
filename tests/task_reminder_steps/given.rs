//! Given steps for reminder lifecycle BDD scenarios.

use std::sync::Arc;

use super::world::{ReminderWorld, run_async};
use crate::test_helpers::base_time;
use chrono::Duration;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdeck::task::{
    adapters::memory::InMemoryTaskStore,
    services::{TaskBoard, TaskBoardConfig, TaskForm},
};

#[given("an empty task board")]
fn empty_task_board(world: &mut ReminderWorld) {
    let board = run_async(TaskBoard::open(
        Arc::new(InMemoryTaskStore::new("tasks")),
        Arc::clone(&world.scheduler),
        Arc::clone(&world.clock),
        TaskBoardConfig::default(),
    ));
    world.board = Some(board);
}

#[given(r#"a task "{title}" due in {minutes:i64} minutes"#)]
fn existing_task_due_in(
    world: &mut ReminderWorld,
    title: String,
    minutes: i64,
) -> Result<(), eyre::Report> {
    let form = TaskForm::new(title).with_due_at(base_time() + Duration::minutes(minutes));
    let task = run_async(world.board()?.add(form)).wrap_err("seed task for scenario")?;
    world.remember(&task);
    Ok(())
}
