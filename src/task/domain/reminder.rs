//! Reminder lifecycle planning.
//!
//! Each task mutation maps to a [`ReminderPlan`]: an optional cancellation
//! of the reminder currently attached to the task and an optional request
//! for a new one. Planning is pure; the task board executes the plan against
//! a scheduler and records the outcome on the task.

use super::{ReminderId, Task, TaskDetails, TaskId};
use chrono::{DateTime, Utc};

/// Request to register a reminder with a scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    task_id: TaskId,
    title: String,
    body: String,
    fire_at: DateTime<Utc>,
}

impl ReminderRequest {
    /// Creates a reminder request.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        title: impl Into<String>,
        body: impl Into<String>,
        fire_at: DateTime<Utc>,
    ) -> Self {
        Self {
            task_id,
            title: title.into(),
            body: body.into(),
            fire_at,
        }
    }

    /// Returns the task the reminder belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the notification title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the notification body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the instant the reminder should fire.
    #[must_use]
    pub const fn fire_at(&self) -> DateTime<Utc> {
        self.fire_at
    }
}

/// Scheduler work required by a single task mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderPlan {
    cancel: Option<ReminderId>,
    schedule: Option<ReminderRequest>,
}

impl ReminderPlan {
    /// Plan that leaves the attached reminder untouched.
    #[must_use]
    pub const fn keep() -> Self {
        Self {
            cancel: None,
            schedule: None,
        }
    }

    /// Returns the reminder to cancel, if any.
    #[must_use]
    pub const fn cancel(&self) -> Option<&ReminderId> {
        self.cancel.as_ref()
    }

    /// Returns the reminder to schedule, if any.
    #[must_use]
    pub const fn schedule(&self) -> Option<&ReminderRequest> {
        self.schedule.as_ref()
    }

    /// Returns `true` when the plan requires no scheduler calls.
    #[must_use]
    pub const fn is_keep(&self) -> bool {
        self.cancel.is_none() && self.schedule.is_none()
    }

    /// Returns `true` when the stored reminder identifier must be cleared
    /// before the plan executes.
    #[must_use]
    pub const fn clears_existing(&self) -> bool {
        !self.is_keep()
    }

    /// Splits the plan into its cancellation and scheduling parts.
    #[must_use]
    pub fn into_parts(self) -> (Option<ReminderId>, Option<ReminderRequest>) {
        (self.cancel, self.schedule)
    }
}

/// Plans the reminder for a freshly created task.
///
/// A reminder is requested only when the due date lies strictly after `now`.
#[must_use]
pub fn plan_for_new(task: &Task, now: DateTime<Utc>, default_body: &str) -> ReminderPlan {
    ReminderPlan {
        cancel: None,
        schedule: request_for(task.id(), &task.details(), now, default_body),
    }
}

/// Plans the reminder change caused by editing `current` into `details`.
///
/// - A changed due date (including gaining or losing one) cancels the
///   existing reminder and requests a new one when the new date is still
///   ahead of `now`.
/// - An unchanged due date with a changed title replaces a pending reminder
///   so its text follows the title.
/// - Anything else keeps the reminder as it is.
#[must_use]
pub fn plan_for_edit(
    current: &Task,
    details: &TaskDetails,
    now: DateTime<Utc>,
    default_body: &str,
) -> ReminderPlan {
    let existing = current.reminder_id().cloned();

    if current.due_at() != details.due_at() {
        return ReminderPlan {
            cancel: existing,
            schedule: request_for(current.id(), details, now, default_body),
        };
    }

    let title_changed = current.title() != details.title();
    let still_pending = details.due_at().is_some_and(|due_at| due_at > now);
    if title_changed && still_pending && existing.is_some() {
        return ReminderPlan {
            cancel: existing,
            schedule: request_for(current.id(), details, now, default_body),
        };
    }

    ReminderPlan::keep()
}

/// Plans the reminder change caused by toggling the completion of `current`.
///
/// Completing a task cancels its reminder. Reopening a task never schedules
/// a new one, even when the due date is still ahead.
#[must_use]
pub fn plan_for_toggle(current: &Task) -> ReminderPlan {
    if current.is_completed() {
        return ReminderPlan::keep();
    }
    ReminderPlan {
        cancel: current.reminder_id().cloned(),
        schedule: None,
    }
}

/// Plans the reminder cleanup for a task that is about to be deleted.
#[must_use]
pub fn plan_for_delete(current: &Task) -> ReminderPlan {
    ReminderPlan {
        cancel: current.reminder_id().cloned(),
        schedule: None,
    }
}

/// Plans the re-arming of a loaded task's reminder for a scheduler that
/// does not know the stored registration.
///
/// The stored identifier is cancelled, and a fresh reminder is requested for
/// an incomplete task whose due date is still ahead of `now`. Tasks with
/// neither a stored identifier nor a pending due date are kept.
#[must_use]
pub fn plan_for_restore(current: &Task, now: DateTime<Utc>, default_body: &str) -> ReminderPlan {
    let schedule = if current.is_completed() {
        None
    } else {
        request_for(current.id(), &current.details(), now, default_body)
    };
    ReminderPlan {
        cancel: current.reminder_id().cloned(),
        schedule,
    }
}

fn request_for(
    task_id: TaskId,
    details: &TaskDetails,
    now: DateTime<Utc>,
    default_body: &str,
) -> Option<ReminderRequest> {
    let fire_at = details.due_at().filter(|due_at| *due_at > now)?;
    let body = details.description().unwrap_or(default_body);
    Some(ReminderRequest::new(
        task_id,
        details.title().as_str(),
        body,
        fire_at,
    ))
}
