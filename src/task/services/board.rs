//! Task board: the single owner of the in-memory task list.
//!
//! Every mutation is applied to the list first, synchronously and in one
//! read-compute-replace step. Reminder scheduling and the whole-list save
//! follow as best-effort side effects; their failures are logged and never
//! undo the mutation.

use crate::task::{
    domain::{
        Project, ProjectId, ReminderId, ReminderPlan, ReminderRequest, Task, TaskDomainError,
        TaskId, order_tasks,
        reminder::{
            plan_for_delete, plan_for_edit, plan_for_new, plan_for_restore, plan_for_toggle,
        },
    },
    ports::{DeletionConfirmation, ReminderError, ReminderScheduler, TaskStore},
    services::{TaskBoardConfig, TaskForm},
};
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Service-level errors for task board operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskBoardError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// No task has the given identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Result type for task board operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Outcome of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user confirmed and the task was removed.
    Deleted(Task),
    /// The user declined; nothing changed.
    Declined,
}

/// Task list state container and orchestration service.
///
/// Clones share the same list and ports.
pub struct TaskBoard<S, N, C>
where
    S: TaskStore,
    N: ReminderScheduler,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    scheduler: Arc<N>,
    clock: Arc<C>,
    config: TaskBoardConfig,
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl<S, N, C> Clone for TaskBoard<S, N, C>
where
    S: TaskStore,
    N: ReminderScheduler,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            scheduler: Arc::clone(&self.scheduler),
            clock: Arc::clone(&self.clock),
            config: self.config.clone(),
            tasks: Arc::clone(&self.tasks),
        }
    }
}

impl<S, N, C> TaskBoard<S, N, C>
where
    S: TaskStore,
    N: ReminderScheduler,
    C: Clock + Send + Sync,
{
    /// Opens a board, loading the persisted list from `store`.
    ///
    /// A missing list starts the board empty. A failed load is logged and
    /// also starts the board empty.
    pub async fn open(
        store: Arc<S>,
        scheduler: Arc<N>,
        clock: Arc<C>,
        config: TaskBoardConfig,
    ) -> Self {
        let tasks = match store.load().await {
            Ok(Some(tasks)) => tasks,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::error!(error = %err, "failed to load tasks, starting with an empty list");
                Vec::new()
            }
        };
        tracing::debug!(count = tasks.len(), "task board opened");
        Self {
            store,
            scheduler,
            clock,
            config,
            tasks: Arc::new(RwLock::new(tasks)),
        }
    }

    /// Returns the board configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskBoardConfig {
        &self.config
    }

    /// Returns the predefined projects tasks can belong to.
    #[must_use]
    pub const fn projects(&self) -> &'static [Project] {
        Project::all()
    }

    /// Returns a snapshot of every task in storage order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.read().clone()
    }

    /// Returns the task with the given identifier, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.read().iter().find(|task| task.id() == id).cloned()
    }

    /// Returns the tasks to display, filtered and ordered at the current
    /// clock time.
    #[must_use]
    pub fn visible_tasks(&self, filter: Option<ProjectId>) -> Vec<Task> {
        order_tasks(&self.read(), filter, self.clock.utc())
    }

    /// Adds a task, scheduling a reminder when it is due in the future.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the form is invalid. The list
    /// is left untouched in that case.
    pub async fn add(&self, form: TaskForm) -> TaskBoardResult<Task> {
        let details = form.into_details()?;
        let task = Task::new(details, &*self.clock);
        let plan = plan_for_new(&task, self.clock.utc(), &self.config.default_reminder_body);
        let task_id = task.id();

        self.mutate(|tasks| {
            tasks.push(task.clone());
            Ok(())
        })?;
        tracing::debug!(%task_id, "task added");

        self.settle(task_id, plan).await;
        Ok(self.get(task_id).unwrap_or(task))
    }

    /// Replaces the editable fields of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the form is invalid or
    /// [`TaskBoardError::NotFound`] when the task does not exist.
    pub async fn update(&self, id: TaskId, form: TaskForm) -> TaskBoardResult<Task> {
        let details = form.into_details()?;
        let now = self.clock.utc();
        let body = self.config.default_reminder_body.as_str();

        let (updated, plan) = self.mutate(|tasks| {
            let task = find_mut(tasks, id)?;
            let plan = plan_for_edit(task, &details, now, body);
            task.apply_details(details);
            if plan.clears_existing() {
                task.detach_reminder();
            }
            Ok((task.clone(), plan))
        })?;
        tracing::debug!(task_id = %id, "task updated");

        self.settle(id, plan).await;
        Ok(self.get(id).unwrap_or(updated))
    }

    /// Flips the completion state of a task.
    ///
    /// Completing cancels a pending reminder. Reopening does not schedule a
    /// new one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::NotFound`] when the task does not exist.
    pub async fn toggle_completion(&self, id: TaskId) -> TaskBoardResult<Task> {
        let (toggled, plan) = self.mutate(|tasks| {
            let task = find_mut(tasks, id)?;
            let plan = plan_for_toggle(task);
            task.toggle_completed();
            if plan.clears_existing() {
                task.detach_reminder();
            }
            Ok((task.clone(), plan))
        })?;
        tracing::debug!(task_id = %id, completed = toggled.is_completed(), "task toggled");

        self.settle(id, plan).await;
        Ok(self.get(id).unwrap_or(toggled))
    }

    /// Deletes a task after asking `confirmation`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::NotFound`] when the task does not exist.
    pub async fn delete<D>(&self, id: TaskId, confirmation: &D) -> TaskBoardResult<DeleteOutcome>
    where
        D: DeletionConfirmation + ?Sized,
    {
        let candidate = self.get(id).ok_or(TaskBoardError::NotFound(id))?;
        if !confirmation.confirm(&candidate).await {
            tracing::debug!(task_id = %id, "task deletion declined");
            return Ok(DeleteOutcome::Declined);
        }

        let removed = self.mutate(|tasks| {
            let index = tasks
                .iter()
                .position(|task| task.id() == id)
                .ok_or(TaskBoardError::NotFound(id))?;
            Ok(tasks.remove(index))
        })?;
        tracing::debug!(task_id = %id, "task deleted");

        self.settle(id, plan_for_delete(&removed)).await;
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Re-registers the reminders of loaded tasks with the scheduler.
    ///
    /// Intended for schedulers whose registrations do not outlive the
    /// process, such as [`crate::task::adapters::timer::TimerReminderScheduler`].
    /// Every stored reminder identifier is cancelled and cleared. Incomplete
    /// tasks due after the current clock time get a fresh reminder. The list
    /// is saved when anything changed.
    ///
    /// Returns the number of reminders scheduled.
    pub async fn restore_reminders(&self) -> usize {
        let now = self.clock.utc();
        let plans: Vec<(TaskId, ReminderPlan)> = {
            let body = self.config.default_reminder_body.as_str();
            let mut tasks = self.write();
            tasks
                .iter_mut()
                .filter_map(|task| {
                    let plan = plan_for_restore(task, now, body);
                    if plan.is_keep() {
                        return None;
                    }
                    task.detach_reminder();
                    Some((task.id(), plan))
                })
                .collect()
        };
        if plans.is_empty() {
            return 0;
        }

        for (task_id, plan) in plans {
            self.dispatch(task_id, plan).await;
        }
        self.persist().await;
        let restored = self
            .read()
            .iter()
            .filter(|task| task.reminder_id().is_some())
            .count();
        tracing::debug!(restored, "reminders restored");
        restored
    }

    /// Runs the reminder plan for a mutation and saves the list.
    async fn settle(&self, task_id: TaskId, plan: ReminderPlan) {
        self.dispatch(task_id, plan).await;
        self.persist().await;
    }

    async fn dispatch(&self, task_id: TaskId, plan: ReminderPlan) {
        let (cancel, schedule) = plan.into_parts();
        if let Some(reminder_id) = cancel {
            self.cancel_reminder(task_id, &reminder_id).await;
        }
        if let Some(request) = schedule
            && let Some(reminder_id) = self.schedule_reminder(&request).await
        {
            self.merge_reminder(&request, reminder_id).await;
        }
    }

    async fn cancel_reminder(&self, task_id: TaskId, reminder_id: &ReminderId) {
        match self.scheduler.cancel(reminder_id).await {
            Ok(()) => tracing::debug!(%task_id, %reminder_id, "reminder cancelled"),
            Err(ReminderError::UnknownReminder(_)) => {
                tracing::debug!(%task_id, %reminder_id, "reminder unknown to scheduler");
            }
            Err(err) => {
                tracing::warn!(%task_id, %reminder_id, error = %err, "failed to cancel reminder");
            }
        }
    }

    async fn schedule_reminder(&self, request: &ReminderRequest) -> Option<ReminderId> {
        let task_id = request.task_id();
        match self.scheduler.schedule(request).await {
            Ok(reminder_id) => {
                tracing::debug!(%task_id, %reminder_id, fire_at = %request.fire_at(), "reminder scheduled");
                Some(reminder_id)
            }
            Err(err) => {
                tracing::warn!(%task_id, error = %err, "failed to schedule reminder");
                None
            }
        }
    }

    /// Attaches a freshly scheduled reminder to its task.
    ///
    /// The reminder is only attached when the task still exists with the
    /// due date it was scheduled for and no other reminder. Otherwise the
    /// registration is orphaned and gets cancelled.
    async fn merge_reminder(&self, request: &ReminderRequest, reminder_id: ReminderId) {
        let task_id = request.task_id();
        let attached = {
            let mut tasks = self.write();
            let waiting = tasks.iter_mut().find(|task| {
                task.id() == task_id
                    && task.due_at() == Some(request.fire_at())
                    && task.reminder_id().is_none()
            });
            if let Some(task) = waiting {
                task.attach_reminder(reminder_id.clone());
                true
            } else {
                false
            }
        };
        if !attached {
            tracing::debug!(%task_id, %reminder_id, "task changed before reminder attached");
            self.cancel_reminder(task_id, &reminder_id).await;
        }
    }

    async fn persist(&self) {
        let snapshot = self.tasks();
        match self.store.save(&snapshot).await {
            Ok(()) => tracing::debug!(count = snapshot.len(), "tasks saved"),
            Err(err) => tracing::warn!(error = %err, "failed to save tasks"),
        }
    }

    /// Replaces the list with a modified copy, or leaves it untouched when
    /// `change` fails.
    fn mutate<T>(
        &self,
        change: impl FnOnce(&mut Vec<Task>) -> TaskBoardResult<T>,
    ) -> TaskBoardResult<T> {
        let mut current = self.write();
        let mut next = current.clone();
        let outcome = change(&mut next)?;
        *current = next;
        Ok(outcome)
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Task>> {
        self.tasks.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Task>> {
        self.tasks.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn find_mut(tasks: &mut [Task], id: TaskId) -> TaskBoardResult<&mut Task> {
    tasks
        .iter_mut()
        .find(|task| task.id() == id)
        .ok_or(TaskBoardError::NotFound(id))
}
