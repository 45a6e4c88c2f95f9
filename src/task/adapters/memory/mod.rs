//! In-memory adapters for the task list ports.
//!
//! These adapters back tests and embeddings that have no durable storage or
//! notification system of their own.

mod confirmation;
mod reminder;
mod store;

pub use confirmation::{AlwaysConfirm, NeverConfirm};
pub use reminder::InMemoryReminderScheduler;
pub use store::InMemoryTaskStore;
