//! Tokio timer reminder scheduler.
//!
//! Each reminder is a spawned task that sleeps until the fire time and then
//! delivers a [`FiredReminder`] on an unbounded channel. Cancelling aborts
//! the sleeping task. Dropping the scheduler aborts every pending timer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::task::{
    domain::{ReminderId, ReminderRequest, TaskId},
    ports::{ReminderError, ReminderResult, ReminderScheduler},
};

/// Notification delivered when a reminder's fire time is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredReminder {
    /// Identifier returned when the reminder was scheduled.
    pub reminder_id: ReminderId,
    /// Task the reminder belongs to.
    pub task_id: TaskId,
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
    /// Requested fire time.
    pub fire_at: DateTime<Utc>,
}

type TimerTable = Arc<Mutex<HashMap<ReminderId, JoinHandle<()>>>>;

/// Scheduler backed by tokio timers.
///
/// Must be used from within a tokio runtime with the time driver enabled.
///
/// Registrations live only as long as the scheduler. Reminder identifiers
/// stored with tasks from an earlier process are unknown to a new instance:
/// they never fire and cancelling them reports
/// [`ReminderError::UnknownReminder`]. Call
/// [`TaskBoard::restore_reminders`](crate::task::services::TaskBoard::restore_reminders)
/// after opening a board to re-arm them.
pub struct TimerReminderScheduler<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    sender: mpsc::UnboundedSender<FiredReminder>,
    timers: TimerTable,
}

impl<C> TimerReminderScheduler<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a scheduler and the receiver its reminders are delivered on.
    #[must_use]
    pub fn new(clock: Arc<C>) -> (Self, mpsc::UnboundedReceiver<FiredReminder>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            clock,
            sender,
            timers: Arc::default(),
        };
        (scheduler, receiver)
    }

    /// Returns the number of reminders that have not fired or been cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<C> Drop for TimerReminderScheduler<C>
where
    C: Clock + Send + Sync,
{
    fn drop(&mut self) {
        let mut timers = self.timers.lock().unwrap_or_else(PoisonError::into_inner);
        for (_, handle) in timers.drain() {
            handle.abort();
        }
    }
}

#[async_trait]
impl<C> ReminderScheduler for TimerReminderScheduler<C>
where
    C: Clock + Send + Sync,
{
    async fn schedule(&self, request: &ReminderRequest) -> ReminderResult<ReminderId> {
        let now = self.clock.utc();
        if request.fire_at() <= now {
            return Err(ReminderError::NotInFuture(request.fire_at()));
        }
        let delay = (request.fire_at() - now)
            .to_std()
            .map_err(|_| ReminderError::NotInFuture(request.fire_at()))?;

        let reminder_id = ReminderId::new(Uuid::new_v4().to_string());
        let fired = FiredReminder {
            reminder_id: reminder_id.clone(),
            task_id: request.task_id(),
            title: request.title().to_owned(),
            body: request.body().to_owned(),
            fire_at: request.fire_at(),
        };
        let sender = self.sender.clone();
        let timers = Arc::clone(&self.timers);

        // The table lock is held across the spawn so the timer cannot remove
        // its own entry before it has been inserted.
        let mut table = self.timers.lock().unwrap_or_else(PoisonError::into_inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            timers
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&fired.reminder_id);
            let reminder_id = fired.reminder_id.clone();
            if sender.send(fired).is_err() {
                tracing::debug!(%reminder_id, "reminder fired with no receiver");
            }
        });
        table.insert(reminder_id.clone(), handle);
        Ok(reminder_id)
    }

    async fn cancel(&self, reminder_id: &ReminderId) -> ReminderResult<()> {
        let handle = self
            .timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(reminder_id);
        match handle {
            Some(handle) => {
                handle.abort();
                Ok(())
            }
            None => Err(ReminderError::UnknownReminder(reminder_id.clone())),
        }
    }
}
