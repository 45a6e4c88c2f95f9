//! Directory-backed JSON task store.
//!
//! The list lives in `<storage_key>.json` inside a capability-scoped
//! directory. Saves write a sibling temporary file and rename it over the
//! previous copy, so a crash mid-write leaves the old list intact.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;
use std::sync::Arc;

use crate::task::{
    adapters::record::{decode_tasks, encode_tasks},
    domain::Task,
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Task store persisting the list as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileTaskStore {
    dir: Arc<Dir>,
    file_name: String,
    temp_name: String,
}

impl JsonFileTaskStore {
    /// Opens the store rooted at `root`, which must already exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Io`] when the directory cannot be opened or
    /// the storage key is not a plain file stem.
    pub fn open(root: impl AsRef<Utf8Path>, storage_key: &str) -> TaskStoreResult<Self> {
        let dir = Dir::open_ambient_dir(root.as_ref(), ambient_authority())?;
        Self::from_dir(dir, storage_key)
    }

    /// Wraps an already opened directory.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Io`] when the storage key is empty, starts
    /// with a dot, or contains a path separator.
    pub fn from_dir(dir: Dir, storage_key: &str) -> TaskStoreResult<Self> {
        validate_storage_key(storage_key)?;
        Ok(Self {
            dir: Arc::new(dir),
            file_name: format!("{storage_key}.json"),
            temp_name: format!(".{storage_key}.json.tmp"),
        })
    }

    /// Returns the file name holding the list.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

fn validate_storage_key(storage_key: &str) -> TaskStoreResult<()> {
    let is_plain = !storage_key.is_empty()
        && !storage_key.starts_with('.')
        && !storage_key.contains(['/', '\\']);
    if is_plain {
        return Ok(());
    }
    Err(std::io::Error::new(
        ErrorKind::InvalidInput,
        format!("storage key '{storage_key}' is not a plain file stem"),
    )
    .into())
}

async fn run_blocking<F, T>(f: F) -> TaskStoreResult<T>
where
    F: FnOnce() -> TaskStoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(TaskStoreError::persistence)?
}

#[async_trait]
impl TaskStore for JsonFileTaskStore {
    async fn load(&self) -> TaskStoreResult<Option<Vec<Task>>> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let raw = run_blocking(move || match dir.read_to_string(&file_name) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        })
        .await?;
        raw.as_deref().map(decode_tasks).transpose()
    }

    async fn save(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let encoded = encode_tasks(tasks)?;
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let temp_name = self.temp_name.clone();
        run_blocking(move || {
            dir.write(&temp_name, encoded)?;
            dir.rename(&temp_name, &dir, &file_name)?;
            Ok(())
        })
        .await
    }
}
