//! Unit tests for the task list module.

mod record_tests;
mod support;
