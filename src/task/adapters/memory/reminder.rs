//! Recording reminder scheduler.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{ReminderId, ReminderRequest, TaskId},
    ports::{ReminderError, ReminderResult, ReminderScheduler},
};

/// Scheduler that records registrations instead of delivering them.
///
/// Fire times are validated against the injected clock exactly like a
/// device scheduler would, which makes the adapter suitable for exercising
/// reminder bookkeeping deterministically.
pub struct InMemoryReminderScheduler<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    state: RwLock<SchedulerState>,
}

#[derive(Debug, Default)]
struct SchedulerState {
    next_sequence: u64,
    pending: BTreeMap<ReminderId, ReminderRequest>,
    cancelled: Vec<ReminderId>,
}

impl<C> InMemoryReminderScheduler<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty scheduler using `clock` as the current time source.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            state: RwLock::default(),
        }
    }

    /// Returns every pending reminder.
    #[must_use]
    pub fn pending(&self) -> Vec<(ReminderId, ReminderRequest)> {
        self.state.read().map_or_else(
            |_| Vec::new(),
            |state| {
                state
                    .pending
                    .iter()
                    .map(|(id, request)| (id.clone(), request.clone()))
                    .collect()
            },
        )
    }

    /// Returns the pending reminder registered for `task_id`, if any.
    #[must_use]
    pub fn pending_for(&self, task_id: TaskId) -> Option<(ReminderId, ReminderRequest)> {
        self.pending()
            .into_iter()
            .find(|(_, request)| request.task_id() == task_id)
    }

    /// Returns `true` when `reminder_id` is still pending.
    #[must_use]
    pub fn is_pending(&self, reminder_id: &ReminderId) -> bool {
        self.state
            .read()
            .is_ok_and(|state| state.pending.contains_key(reminder_id))
    }

    /// Returns every reminder cancelled so far, in cancellation order.
    #[must_use]
    pub fn cancelled(&self) -> Vec<ReminderId> {
        self.state
            .read()
            .map_or_else(|_| Vec::new(), |state| state.cancelled.clone())
    }
}

fn poisoned(err: impl std::fmt::Display) -> ReminderError {
    ReminderError::scheduler(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> ReminderScheduler for InMemoryReminderScheduler<C>
where
    C: Clock + Send + Sync,
{
    async fn schedule(&self, request: &ReminderRequest) -> ReminderResult<ReminderId> {
        if request.fire_at() <= self.clock.utc() {
            return Err(ReminderError::NotInFuture(request.fire_at()));
        }
        let mut state = self.state.write().map_err(poisoned)?;
        state.next_sequence += 1;
        let reminder_id = ReminderId::new(format!("reminder-{}", state.next_sequence));
        state.pending.insert(reminder_id.clone(), request.clone());
        Ok(reminder_id)
    }

    async fn cancel(&self, reminder_id: &ReminderId) -> ReminderResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.pending.remove(reminder_id).is_none() {
            return Err(ReminderError::UnknownReminder(reminder_id.clone()));
        }
        state.cancelled.push(reminder_id.clone());
        Ok(())
    }
}
