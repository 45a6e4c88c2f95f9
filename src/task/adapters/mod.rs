//! Adapter implementations for task list ports.
//!
//! - [`memory`]: in-process store, scheduler and confirmation adapters
//! - [`json_file`]: directory-backed JSON store
//! - [`timer`]: tokio timer reminder scheduler
//! - [`record`]: persisted record format shared by the stores

pub mod json_file;
pub mod memory;
pub mod record;
pub mod timer;
