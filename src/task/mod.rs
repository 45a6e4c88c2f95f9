//! Task list management for Taskdeck.
//!
//! Tasks are created, edited, completed and deleted through the
//! [`services::TaskBoard`], which owns the in-memory list, persists it
//! wholesale after every change, and keeps each task's reminder in step
//! with its due date and title. The module follows hexagonal architecture:
//!
//! - Domain types and pure policies in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
