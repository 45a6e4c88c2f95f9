//! Scheduler port for task reminders.

use crate::task::domain::{ReminderId, ReminderRequest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;
use thiserror::Error;

/// Result type for reminder scheduler operations.
pub type ReminderResult<T> = Result<T, ReminderError>;

/// Local notification scheduling contract.
///
/// Callers treat every operation as best effort: failures are logged and
/// never undo the task mutation that triggered them.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReminderScheduler: Send + Sync {
    /// Registers a reminder that fires at `request.fire_at()`.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::NotInFuture`] when the fire time is not
    /// strictly after the scheduler's current time, or
    /// [`ReminderError::Scheduler`] when registration fails.
    async fn schedule(&self, request: &ReminderRequest) -> ReminderResult<ReminderId>;

    /// Cancels a previously registered reminder.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::UnknownReminder`] when the identifier is not
    /// pending, or [`ReminderError::Scheduler`] when cancellation fails.
    async fn cancel(&self, reminder_id: &ReminderId) -> ReminderResult<()>;
}

/// Errors returned by reminder scheduler implementations.
#[derive(Debug, Clone, Error)]
pub enum ReminderError {
    /// The requested fire time is not in the future.
    #[error("reminder time {0} is not in the future")]
    NotInFuture(DateTime<Utc>),

    /// No pending reminder has this identifier.
    #[error("unknown reminder: {0}")]
    UnknownReminder(ReminderId),

    /// Scheduler backend failure.
    #[error("scheduler error: {0}")]
    Scheduler(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReminderError {
    /// Wraps a scheduler backend error.
    pub fn scheduler(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Scheduler(Arc::new(err))
    }
}
