//! Port contracts for the task list.
//!
//! Ports define infrastructure-agnostic interfaces used by the task board:
//! durable storage of the whole list, reminder scheduling, and interactive
//! confirmation of destructive actions.

pub mod confirmation;
pub mod reminder;
pub mod store;

pub use confirmation::DeletionConfirmation;
#[cfg(test)]
pub use reminder::MockReminderScheduler;
pub use reminder::{ReminderError, ReminderResult, ReminderScheduler};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
