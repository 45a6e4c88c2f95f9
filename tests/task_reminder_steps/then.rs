//! Then steps for reminder lifecycle BDD scenarios.

use super::world::ReminderWorld;
use rstest_bdd_macros::then;

#[then(r#"the task "{title}" has a pending reminder"#)]
fn task_has_pending_reminder(world: &ReminderWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let task = world
        .board()?
        .get(id)
        .ok_or_else(|| eyre::eyre!("task {title} missing from board"))?;
    let reminder_id = task
        .reminder_id()
        .ok_or_else(|| eyre::eyre!("task {title} has no reminder"))?;
    eyre::ensure!(
        world.scheduler.is_pending(reminder_id),
        "reminder {reminder_id} for {title} is not pending"
    );
    Ok(())
}

#[then(r#"the task "{title}" has no reminder"#)]
fn task_has_no_reminder(world: &ReminderWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let task = world
        .board()?
        .get(id)
        .ok_or_else(|| eyre::eyre!("task {title} missing from board"))?;
    eyre::ensure!(
        task.reminder_id().is_none(),
        "task {title} unexpectedly has a reminder"
    );
    eyre::ensure!(
        world.scheduler.pending_for(id).is_none(),
        "scheduler still holds a reminder for {title}"
    );
    Ok(())
}

#[then(r#"the original reminder of "{title}" is cancelled"#)]
fn original_reminder_cancelled(world: &ReminderWorld, title: String) -> Result<(), eyre::Report> {
    let original = world
        .original_reminders
        .get(&title)
        .ok_or_else(|| eyre::eyre!("task {title} never had a reminder"))?;
    eyre::ensure!(
        world.scheduler.cancelled().contains(original),
        "reminder {original} for {title} was not cancelled"
    );
    Ok(())
}

#[then(r#"the board still lists "{title}""#)]
fn board_lists_task(world: &ReminderWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    eyre::ensure!(
        world.board()?.get(id).is_some(),
        "task {title} should still be listed"
    );
    Ok(())
}

#[then(r#"the board no longer lists "{title}""#)]
fn board_omits_task(world: &ReminderWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    eyre::ensure!(
        world.board()?.get(id).is_none(),
        "task {title} should have been removed"
    );
    Ok(())
}
