//! Board view models
//!
//! These types are what a rendering layer consumes; nothing here is
//! persisted.

use serde::Serialize;

use crate::task::{Task, TaskStatus};

/// One status lane of a board
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub status: TaskStatus,
    pub title: String,
    pub tasks: Vec<Task>,
}

/// The full three-column view of one board
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub board: String,
    pub columns: Vec<Column>,
}
