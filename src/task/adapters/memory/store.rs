//! Key-value backed task store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    adapters::record::{decode_tasks, encode_tasks},
    domain::Task,
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Values are kept as encoded JSON text under a storage key, so loads go
/// through the same record format and migration as durable stores.
#[derive(Debug, Clone)]
pub struct InMemoryTaskStore {
    storage_key: String,
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    entries: HashMap<String, String>,
    save_count: usize,
}

impl InMemoryTaskStore {
    /// Creates an empty store that reads and writes `storage_key`.
    #[must_use]
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            state: Arc::default(),
        }
    }

    /// Creates a store pre-seeded with raw encoded text under `storage_key`.
    #[must_use]
    pub fn with_raw(storage_key: impl Into<String>, raw: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let mut entries = HashMap::new();
        entries.insert(storage_key.clone(), raw.into());
        Self {
            storage_key,
            state: Arc::new(RwLock::new(InMemoryStoreState {
                entries,
                save_count: 0,
            })),
        }
    }

    /// Returns the raw encoded text currently stored, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.entries.get(&self.storage_key).cloned())
    }

    /// Returns how many times the list has been saved.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.state.read().map_or(0, |state| state.save_count)
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn load(&self) -> TaskStoreResult<Option<Vec<Task>>> {
        let raw = {
            let state = self.state.read().map_err(poisoned)?;
            state.entries.get(&self.storage_key).cloned()
        };
        raw.as_deref().map(decode_tasks).transpose()
    }

    async fn save(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let encoded = encode_tasks(tasks)?;
        let mut state = self.state.write().map_err(poisoned)?;
        state.entries.insert(self.storage_key.clone(), encoded);
        state.save_count += 1;
        Ok(())
    }
}
