//! Step definitions for reminder lifecycle scenarios.

mod given;
mod then;
mod when;
pub mod world;
