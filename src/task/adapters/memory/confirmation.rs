//! Non-interactive deletion confirmations.

use async_trait::async_trait;

use crate::task::{domain::Task, ports::DeletionConfirmation};

/// Confirms every deletion.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

/// Declines every deletion.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

#[async_trait]
impl DeletionConfirmation for AlwaysConfirm {
    async fn confirm(&self, _task: &Task) -> bool {
        true
    }
}

#[async_trait]
impl DeletionConfirmation for NeverConfirm {
    async fn confirm(&self, _task: &Task) -> bool {
        false
    }
}
