//! Storage port for the persisted task list.

use crate::task::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Whole-list persistence contract.
///
/// The store holds a single serialized copy of the task list under one
/// fixed key. Every save overwrites that copy completely.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Loads the persisted list.
    ///
    /// Returns `None` when nothing has been saved yet. Implementations
    /// apply the record migration rules, so legacy records come back with
    /// default priority and project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the stored data cannot be read or
    /// decoded.
    async fn load(&self) -> TaskStoreResult<Option<Vec<Task>>>;

    /// Replaces the persisted list with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the list cannot be encoded or written.
    async fn save(&self, tasks: &[Task]) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Reading or writing the backing medium failed.
    #[error("task store I/O error: {0}")]
    Io(Arc<std::io::Error>),

    /// The stored data could not be encoded or decoded.
    #[error("task store encoding error: {0}")]
    Encoding(Arc<serde_json::Error>),

    /// Any other persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<std::io::Error> for TaskStoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for TaskStoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(Arc::new(err))
    }
}
