//! When steps for reminder lifecycle BDD scenarios.

use super::world::{ReminderWorld, run_async};
use crate::test_helpers::base_time;
use chrono::Duration;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskdeck::task::{
    adapters::memory::{AlwaysConfirm, NeverConfirm},
    services::TaskForm,
};

fn add_task(world: &mut ReminderWorld, title: String, offset: Duration) -> Result<(), eyre::Report> {
    let form = TaskForm::new(title).with_due_at(base_time() + offset);
    let task = run_async(world.board()?.add(form)).wrap_err("add task")?;
    world.remember(&task);
    Ok(())
}

#[when(r#"I add a task "{title}" due in {minutes:i64} minutes"#)]
fn add_task_due_in(
    world: &mut ReminderWorld,
    title: String,
    minutes: i64,
) -> Result<(), eyre::Report> {
    add_task(world, title, Duration::minutes(minutes))
}

#[when(r#"I add a task "{title}" due {minutes:i64} minutes ago"#)]
fn add_task_due_ago(
    world: &mut ReminderWorld,
    title: String,
    minutes: i64,
) -> Result<(), eyre::Report> {
    add_task(world, title, -Duration::minutes(minutes))
}

#[when(r#"the due date of "{title}" moves to {minutes:i64} minutes from now"#)]
fn move_due_date(
    world: &mut ReminderWorld,
    title: String,
    minutes: i64,
) -> Result<(), eyre::Report> {
    let board = world.board()?;
    let id = world.task_id(&title)?;
    let current = board
        .get(id)
        .ok_or_else(|| eyre::eyre!("task {title} missing from board"))?;
    let form = TaskForm::from_task(&current).with_due_at(base_time() + Duration::minutes(minutes));
    run_async(board.update(id, form)).wrap_err("move due date")?;
    Ok(())
}

#[when(r#"the task "{title}" is completed"#)]
fn complete_task(world: &mut ReminderWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let task = run_async(world.board()?.toggle_completion(id)).wrap_err("complete task")?;
    eyre::ensure!(task.is_completed(), "task {title} should be completed");
    Ok(())
}

#[when(r#"the task "{title}" is reopened"#)]
fn reopen_task(world: &mut ReminderWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let task = run_async(world.board()?.toggle_completion(id)).wrap_err("reopen task")?;
    eyre::ensure!(!task.is_completed(), "task {title} should be open again");
    Ok(())
}

#[when(r#"deletion of "{title}" is declined"#)]
fn decline_deletion(world: &mut ReminderWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    run_async(world.board()?.delete(id, &NeverConfirm)).wrap_err("decline deletion")?;
    Ok(())
}

#[when(r#"deletion of "{title}" is confirmed"#)]
fn confirm_deletion(world: &mut ReminderWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    run_async(world.board()?.delete(id, &AlwaysConfirm)).wrap_err("confirm deletion")?;
    Ok(())
}
