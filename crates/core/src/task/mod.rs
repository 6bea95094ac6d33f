//! Task module
//!
//! This module contains task-related types and logic.

mod model;
mod seed;
mod store;

pub use model::*;
pub use seed::seed_tasks;
pub use store::{TaskStore, TASKS_KEY};
