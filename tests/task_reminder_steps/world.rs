//! Shared world state for reminder lifecycle BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use crate::test_helpers::{FixedClock, base_time};
use rstest::fixture;
use taskdeck::task::{
    adapters::memory::{InMemoryReminderScheduler, InMemoryTaskStore},
    domain::{ReminderId, Task, TaskId},
    services::TaskBoard,
};

/// Board type used by the BDD world.
pub type TestBoard =
    TaskBoard<InMemoryTaskStore, InMemoryReminderScheduler<FixedClock>, FixedClock>;

/// Scenario world for reminder lifecycle behaviour tests.
pub struct ReminderWorld {
    pub board: Option<TestBoard>,
    pub scheduler: Arc<InMemoryReminderScheduler<FixedClock>>,
    pub clock: Arc<FixedClock>,
    pub task_ids: HashMap<String, TaskId>,
    pub original_reminders: HashMap<String, ReminderId>,
}

impl ReminderWorld {
    /// Creates a world with no board opened yet.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(FixedClock::at(base_time()));
        let scheduler = Arc::new(InMemoryReminderScheduler::new(Arc::clone(&clock)));
        Self {
            board: None,
            scheduler,
            clock,
            task_ids: HashMap::new(),
            original_reminders: HashMap::new(),
        }
    }

    /// Returns the opened board.
    pub fn board(&self) -> Result<&TestBoard, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("task board has not been opened"))
    }

    /// Returns the identifier of the task created with `title`.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.task_ids
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled {title} in scenario world"))
    }

    /// Records a freshly created task and its initial reminder.
    pub fn remember(&mut self, task: &Task) {
        let title = task.title().as_str().to_owned();
        if let Some(reminder_id) = task.reminder_id() {
            self.original_reminders
                .insert(title.clone(), reminder_id.clone());
        }
        self.task_ids.insert(title, task.id());
    }
}

impl Default for ReminderWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReminderWorld {
    ReminderWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
