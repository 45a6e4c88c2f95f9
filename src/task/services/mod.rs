//! Application services for the task list.

mod board;
mod config;
mod form;

pub use board::{DeleteOutcome, TaskBoard, TaskBoardError, TaskBoardResult};
pub use config::TaskBoardConfig;
pub use form::TaskForm;
