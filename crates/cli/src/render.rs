//! Plain-text rendering for board views and task lists.

use tb_core::board::BoardView;
use tb_core::task::Task;

/// One task as a flat list row: id, column, board, title.
pub fn task_row(task: &Task) -> String {
    let mut row = format!(
        "[{:>3}] {:<5} {:<16} {}",
        task.id,
        task.status.as_str(),
        task.board,
        task.title
    );
    if !task.description.is_empty() {
        row.push_str(" - ");
        row.push_str(&task.description);
    }
    row
}

/// One task as a column row; the column already names the status.
fn column_row(task: &Task) -> String {
    let mut row = format!("  [{:>3}] {}", task.id, task.title);
    if !task.description.is_empty() {
        row.push_str(" - ");
        row.push_str(&task.description);
    }
    row
}

/// A full board: name, underline, then one block per column with counts.
pub fn render_board(view: &BoardView) -> String {
    let mut out = String::new();
    out.push_str(&view.board);
    out.push('\n');
    out.push_str(&"=".repeat(view.board.chars().count()));
    out.push('\n');
    for column in &view.columns {
        out.push('\n');
        out.push_str(&format!("{} ({})\n", column.title, column.tasks.len()));
        for task in &column.tasks {
            out.push_str(&column_row(task));
            out.push('\n');
        }
    }
    out
}

/// A flat task list, one row per task.
pub fn render_task_list(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str(&task_row(task));
        out.push('\n');
    }
    out
}
