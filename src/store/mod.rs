//! Task store module.
//!
//! This module owns the canonical to-do data:
//! - `Task`, `TaskId` and `Filter` data types
//! - `Action` values describing a single mutation
//! - `TaskStore`, the single-writer container applying those mutations

mod action;
mod task;
mod task_store;

pub use action::Action;
pub use task::{Filter, Task, TaskId};
pub use task_store::TaskStore;
