//! Create/edit form payload.

use crate::task::domain::{Priority, ProjectId, Task, TaskDetails, TaskDomainError, TaskTitle};
use chrono::{DateTime, Utc};

/// Unvalidated task fields as submitted by the create or edit form.
///
/// Editing submits the complete form, so every field not set explicitly
/// takes its default value. Use [`TaskForm::from_task`] to start from the
/// current values of an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    description: Option<String>,
    due_at: Option<DateTime<Utc>>,
    priority: Priority,
    project: ProjectId,
}

impl TaskForm {
    /// Creates a form with a title and default values for everything else.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_at: None,
            priority: Priority::default(),
            project: ProjectId::default(),
        }
    }

    /// Creates a form prefilled with the values of `task`.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            due_at: task.due_at(),
            priority: task.priority(),
            project: task.project(),
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn without_description(mut self) -> Self {
        self.description = None;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at);
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn without_due_at(mut self) -> Self {
        self.due_at = None;
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

    /// Validates the form into domain task details.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn into_details(self) -> Result<TaskDetails, TaskDomainError> {
        let title = TaskTitle::new(self.title)?;
        Ok(TaskDetails::new(title)
            .with_description(self.description)
            .with_due_at(self.due_at)
            .with_priority(self.priority)
            .with_project(self.project))
    }
}
