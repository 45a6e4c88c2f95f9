//! Shared fixtures for task unit tests.

use crate::task::domain::{PersistedTaskData, Priority, ProjectId, Task, TaskId, TaskTitle};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::{PoisonError, RwLock};

/// Clock frozen at a settable instant.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.write().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Reference instant used throughout the unit tests.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0)
        .single()
        .expect("valid base time")
}

/// Persisted task data with defaults, created `created_offset` after the
/// base time.
pub fn persisted(title: &str, created_offset: Duration) -> PersistedTaskData {
    PersistedTaskData {
        id: TaskId::new(),
        title: TaskTitle::new(title).expect("valid title"),
        description: None,
        completed: false,
        created_at: base_time() + created_offset,
        due_at: None,
        priority: Priority::Low,
        project: ProjectId::Inbox,
        reminder_id: None,
    }
}

/// Builds a task from persisted data after applying `customise`.
pub fn task_with(title: &str, customise: impl FnOnce(&mut PersistedTaskData)) -> Task {
    let mut data = persisted(title, Duration::zero());
    customise(&mut data);
    Task::from_persisted(data)
}
