//! Taskdeck: offline-first task list core.
//!
//! This crate provides the core of a single-user to-do list: tasks grouped
//! into a fixed set of projects, a display ordering policy, and reminder
//! bookkeeping that keeps local notifications in step with task edits.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task values and policies with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for storage, reminders and
//!   confirmation
//! - **Adapters**: Concrete implementations of ports (JSON file, timers,
//!   in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task model, ordering, reminder lifecycle and the task board

pub mod task;
