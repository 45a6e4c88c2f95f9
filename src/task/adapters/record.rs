//! Persisted record format for the task list.
//!
//! The list is stored as a JSON array of camelCase records. Decoding applies
//! the forward-compatible migration rules: records written before priorities
//! or projects existed come back with [`Priority::Low`] and
//! [`ProjectId::Inbox`].

use crate::task::{
    domain::{
        PersistedTaskData, Priority, ProjectId, ReminderId, Task, TaskDomainError, TaskId,
        TaskTitle,
    },
    ports::TaskStoreResult,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Serialized form of a single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Optional due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Priority level, absent in legacy records. Kept as raw JSON so
    /// out-of-range or textual values migrate instead of failing the record.
    #[serde(default)]
    pub priority: Option<Value>,
    /// Project identifier, absent in legacy records.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Reminder registration, if one is pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<ReminderId>,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            completed: task.is_completed(),
            created_at: task.created_at(),
            due_date: task.due_at(),
            priority: Some(Value::from(task.priority().value())),
            project_id: Some(task.project().as_str().to_owned()),
            notification_id: task.reminder_id().cloned(),
        }
    }
}

impl TaskRecord {
    /// Converts the record into a task, applying the migration defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the stored title is
    /// blank.
    pub fn into_task(self) -> Result<Task, TaskDomainError> {
        let title = TaskTitle::new(self.title)?;
        let priority = migrate_priority(self.id, self.priority.as_ref());
        let project = migrate_project(self.id, self.project_id.as_deref());
        Ok(Task::from_persisted(PersistedTaskData {
            id: self.id,
            title,
            description: self.description,
            completed: self.completed,
            created_at: self.created_at,
            due_at: self.due_date,
            priority,
            project,
            reminder_id: self.notification_id,
        }))
    }
}

fn migrate_priority(task_id: TaskId, stored: Option<&Value>) -> Priority {
    let Some(value) = stored else {
        return Priority::default();
    };
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|text| text.trim().parse().ok()))
        .and_then(|level| u8::try_from(level).ok())
        .and_then(Priority::from_value)
        .unwrap_or_else(|| {
            tracing::warn!(%task_id, %value, "stored priority not recognised, using default");
            Priority::default()
        })
}

fn migrate_project(task_id: TaskId, stored: Option<&str>) -> ProjectId {
    match stored {
        None => ProjectId::default(),
        Some(value) => ProjectId::from_storage(value).unwrap_or_else(|| {
            tracing::warn!(%task_id, project = value, "unknown stored project, using inbox");
            ProjectId::default()
        }),
    }
}

/// Encodes the whole task list.
///
/// # Errors
///
/// Returns [`crate::task::ports::TaskStoreError::Encoding`] when
/// serialization fails.
pub fn encode_tasks(tasks: &[Task]) -> TaskStoreResult<String> {
    let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Decodes a stored task list.
///
/// Entries are read one at a time. An entry that is not a readable record or
/// fails domain validation is dropped with a warning, so a single bad entry
/// does not hide the rest of the list.
///
/// # Errors
///
/// Returns [`crate::task::ports::TaskStoreError::Encoding`] when the text is
/// not a JSON array.
pub fn decode_tasks(raw: &str) -> TaskStoreResult<Vec<Task>> {
    let entries: Vec<Value> = serde_json::from_str(raw)?;
    let tasks = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| decode_entry(index, entry))
        .collect();
    Ok(tasks)
}

fn decode_entry(index: usize, entry: Value) -> Option<Task> {
    let record = serde_json::from_value::<TaskRecord>(entry)
        .map_err(|err| tracing::warn!(index, error = %err, "dropping unreadable stored task"))
        .ok()?;
    let task_id = record.id;
    record
        .into_task()
        .map_err(|err| tracing::warn!(%task_id, error = %err, "dropping stored task"))
        .ok()
}
