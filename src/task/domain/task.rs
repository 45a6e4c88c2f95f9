//! Task aggregate root and its editable details.

use super::{Priority, ProjectId, ReminderId, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;

/// Validated, trimmed, non-empty task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User-editable fields of a task, as submitted by the create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    title: TaskTitle,
    description: Option<String>,
    due_at: Option<DateTime<Utc>>,
    priority: Priority,
    project: ProjectId,
}

impl TaskDetails {
    /// Creates details with a title and default values for everything else.
    #[must_use]
    pub fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: None,
            due_at: None,
            priority: Priority::default(),
            project: ProjectId::default(),
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = title;
        self
    }

    /// Sets the description. Blank text clears it.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = normalize_description(description);
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_at(mut self, due_at: Option<DateTime<Utc>>) -> Self {
        self.due_at = due_at;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the project.
    #[must_use]
    pub const fn with_project(mut self, project: ProjectId) -> Self {
        self.project = project;
        self
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the project.
    #[must_use]
    pub const fn project(&self) -> ProjectId {
        self.project
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    completed: bool,
    created_at: DateTime<Utc>,
    due_at: Option<DateTime<Utc>>,
    priority: Priority,
    project: ProjectId,
    reminder_id: Option<ReminderId>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted due date, if any.
    pub due_at: Option<DateTime<Utc>>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted project reference.
    pub project: ProjectId,
    /// Persisted reminder registration, if any.
    pub reminder_id: Option<ReminderId>,
}

impl Task {
    /// Creates a new incomplete task stamped with the current clock time.
    #[must_use]
    pub fn new(details: TaskDetails, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title: details.title,
            description: details.description,
            completed: false,
            created_at: clock.utc(),
            due_at: details.due_at,
            priority: details.priority,
            project: details.project,
            reminder_id: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: normalize_description(data.description),
            completed: data.completed,
            created_at: data.created_at,
            due_at: data.due_at,
            priority: data.priority,
            project: data.project,
            reminder_id: data.reminder_id,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the project reference.
    #[must_use]
    pub const fn project(&self) -> ProjectId {
        self.project
    }

    /// Returns the attached reminder registration, if any.
    #[must_use]
    pub const fn reminder_id(&self) -> Option<&ReminderId> {
        self.reminder_id.as_ref()
    }

    /// Returns the editable fields of this task.
    #[must_use]
    pub fn details(&self) -> TaskDetails {
        TaskDetails {
            title: self.title.clone(),
            description: self.description.clone(),
            due_at: self.due_at,
            priority: self.priority,
            project: self.project,
        }
    }

    /// Returns `true` when the due date lies strictly before `now`,
    /// regardless of completion.
    #[must_use]
    pub fn is_due_before(&self, now: DateTime<Utc>) -> bool {
        self.due_at.is_some_and(|due_at| due_at < now)
    }

    /// Returns `true` when the task is incomplete and its due date lies
    /// strictly before `now`.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.is_due_before(now)
    }

    /// Replaces the editable fields. Identity and creation time are kept.
    pub(crate) fn apply_details(&mut self, details: TaskDetails) {
        self.title = details.title;
        self.description = details.description;
        self.due_at = details.due_at;
        self.priority = details.priority;
        self.project = details.project;
    }

    /// Flips the completion flag and returns the new value.
    pub(crate) fn toggle_completed(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    /// Attaches a reminder registration.
    pub(crate) fn attach_reminder(&mut self, reminder_id: ReminderId) {
        self.reminder_id = Some(reminder_id);
    }

    /// Detaches the reminder registration, returning it.
    pub(crate) fn detach_reminder(&mut self) -> Option<ReminderId> {
        self.reminder_id.take()
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
