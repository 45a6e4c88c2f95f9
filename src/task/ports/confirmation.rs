//! Confirmation port for destructive task actions.

use crate::task::domain::Task;
use async_trait::async_trait;

/// Asks the user to confirm a task deletion.
#[async_trait]
pub trait DeletionConfirmation: Send + Sync {
    /// Returns `true` when the user agrees to delete `task`.
    async fn confirm(&self, task: &Task) -> bool;
}
