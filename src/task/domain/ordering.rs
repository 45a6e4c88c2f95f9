//! Display ordering and project filtering for task lists.

use super::{ProjectId, Task};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Returns the tasks to display, filtered by project and sorted for display.
///
/// The result depends only on the inputs. `now` decides which tasks count as
/// past due, so two evaluations with different `now` values may disagree.
#[must_use]
pub fn order_tasks(tasks: &[Task], filter: Option<ProjectId>, now: DateTime<Utc>) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| filter.is_none_or(|project| task.project() == project))
        .cloned()
        .collect();
    visible.sort_by(|left, right| compare_for_display(left, right, now));
    visible
}

/// Compares two tasks by display precedence.
///
/// Rules, in order:
/// 1. incomplete before completed;
/// 2. due before `now` before everything else;
/// 3. ascending priority value;
/// 4. dated before undated, earlier due date first;
/// 5. newest creation timestamp first.
///
/// Tasks created at the same instant fall back to their identifiers.
#[must_use]
pub fn compare_for_display(left: &Task, right: &Task, now: DateTime<Utc>) -> Ordering {
    left.is_completed()
        .cmp(&right.is_completed())
        .then_with(|| right.is_due_before(now).cmp(&left.is_due_before(now)))
        .then_with(|| left.priority().cmp(&right.priority()))
        .then_with(|| compare_due_dates(left.due_at(), right.due_at()))
        .then_with(|| right.created_at().cmp(&left.created_at()))
        .then_with(|| left.id().cmp(&right.id()))
}

fn compare_due_dates(left: Option<DateTime<Utc>>, right: Option<DateTime<Utc>>) -> Ordering {
    match (left, right) {
        (Some(left_due), Some(right_due)) => left_due.cmp(&right_due),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
