//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The priority value is outside the supported `1..=4` range.
    #[error("invalid priority {0}, expected a value between 1 and 4")]
    InvalidPriority(u8),
}
