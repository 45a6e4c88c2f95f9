//! Task board configuration.

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "tasks";

/// Reminder body used for tasks without a description.
pub const DEFAULT_REMINDER_BODY: &str = "This task is due now.";

/// Configuration for a [`super::TaskBoard`] and the stores it talks to.
///
/// # Examples
///
/// ```
/// use taskdeck::task::services::TaskBoardConfig;
///
/// let config = TaskBoardConfig::default();
/// assert_eq!(config.storage_key, "tasks");
///
/// let custom = TaskBoardConfig::default().with_storage_key("work-tasks");
/// assert_eq!(custom.storage_key, "work-tasks");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoardConfig {
    /// Key under which the whole task list is persisted.
    pub storage_key: String,
    /// Reminder body for tasks that have no description.
    pub default_reminder_body: String,
}

impl TaskBoardConfig {
    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Sets the fallback reminder body.
    #[must_use]
    pub fn with_default_reminder_body(mut self, body: impl Into<String>) -> Self {
        self.default_reminder_body = body.into();
        self
    }
}

impl Default for TaskBoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            default_reminder_body: DEFAULT_REMINDER_BODY.to_owned(),
        }
    }
}
