//! Domain model for the task list.
//!
//! Tasks, priorities and the fixed project catalogue live here together with
//! the two pure policies that operate on them: display ordering and reminder
//! planning. Nothing in this module performs I/O.

mod error;
mod ids;
pub mod ordering;
mod priority;
mod project;
pub mod reminder;
mod task;

pub use error::TaskDomainError;
pub use ids::{ReminderId, TaskId};
pub use ordering::{compare_for_display, order_tasks};
pub use priority::Priority;
pub use project::{Project, ProjectId};
pub use reminder::{ReminderPlan, ReminderRequest};
pub use task::{PersistedTaskData, Task, TaskDetails, TaskTitle};
