//! Board projection
//!
//! Pure derivations from the task collection: which boards exist, what the
//! columns of a board hold, and which board is active. Everything here is
//! recomputed from the tasks passed in; no state is held or persisted.

use crate::task::{Task, TaskStatus};

use super::model::{BoardView, Column};

/// Distinct board names in first-seen order
///
/// Tasks with an empty board name are skipped; a board only exists while a
/// task names it.
pub fn board_names(tasks: &[Task]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for task in tasks {
        if task.board.is_empty() {
            continue;
        }
        if !names.iter().any(|name| name == &task.board) {
            names.push(task.board.clone());
        }
    }
    names
}

/// Tasks on `board` currently in `status`, preserving store order
pub fn tasks_by_status<'a>(tasks: &'a [Task], board: &str, status: TaskStatus) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.board == board && task.status == status)
        .collect()
}

/// The board to select: the persisted one while it still exists, otherwise
/// the first discovered board
///
/// Returns `None` when there are no boards at all; that is a valid state,
/// not an error.
pub fn resolve_active_board(boards: &[String], persisted: Option<&str>) -> Option<String> {
    match persisted {
        Some(name) if boards.iter().any(|board| board == name) => Some(name.to_string()),
        _ => boards.first().cloned(),
    }
}

/// Column header text for a status lane
pub fn column_title(status: TaskStatus) -> String {
    status.as_str().to_uppercase()
}

/// Assemble the three-column view of `board`
pub fn board_view(tasks: &[Task], board: &str) -> BoardView {
    let columns = TaskStatus::ALL
        .iter()
        .map(|&status| Column {
            status,
            title: column_title(status),
            tasks: tasks_by_status(tasks, board, status)
                .into_iter()
                .cloned()
                .collect(),
        })
        .collect();

    BoardView {
        board: board.to_string(),
        columns,
    }
}
