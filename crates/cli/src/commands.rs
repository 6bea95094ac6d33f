//! Subcommand handlers
//!
//! Each handler loads what it needs from the stores, performs one
//! operation, and prints the outcome. Validation errors surface as
//! `anyhow` errors and become the process exit message.

use anyhow::{bail, Context, Result};

use tb_core::board::{board_names, board_view, column_title, resolve_active_board};
use tb_core::prefs::{PrefsStore, Theme};
use tb_core::task::{NewTask, TaskPatch, TaskStatus, TaskStore};

use crate::render;

/// Resolves the board an operation targets: the explicit name when given,
/// otherwise the persisted active board if it still exists.
async fn target_board(
    store: &TaskStore,
    prefs: &PrefsStore,
    explicit: Option<&str>,
) -> Result<Option<String>> {
    if let Some(board) = explicit {
        return Ok(Some(board.to_string()));
    }
    let tasks = store.tasks().await?;
    let boards = board_names(&tasks);
    let persisted = prefs.active_board().await?;
    Ok(resolve_active_board(&boards, persisted.as_deref()))
}

pub async fn boards(store: &TaskStore, prefs: &PrefsStore) -> Result<()> {
    let tasks = store.tasks().await?;
    let boards = board_names(&tasks);
    if boards.is_empty() {
        println!("No boards yet. Add a task to create one.");
        return Ok(());
    }

    let persisted = prefs.active_board().await?;
    let active = resolve_active_board(&boards, persisted.as_deref());
    for board in &boards {
        let marker = if Some(board) == active.as_ref() { "*" } else { " " };
        println!("{} {}", marker, board);
    }
    Ok(())
}

pub async fn use_board(store: &TaskStore, prefs: &PrefsStore, board: &str) -> Result<()> {
    let tasks = store.tasks().await?;
    let boards = board_names(&tasks);
    if boards.is_empty() {
        bail!("No boards yet. Add a task to create one.");
    }
    if !boards.iter().any(|b| b == board) {
        bail!("No board named '{}' (available: {})", board, boards.join(", "));
    }
    prefs.set_active_board(board).await?;
    println!("Active board: {}", board);
    Ok(())
}

pub async fn show(store: &TaskStore, prefs: &PrefsStore, board: Option<&str>) -> Result<()> {
    let tasks = store.tasks().await?;
    let boards = board_names(&tasks);

    let name = match board {
        Some(name) => {
            if !boards.iter().any(|b| b == name) {
                bail!("No board named '{}'", name);
            }
            name.to_string()
        }
        None => {
            let persisted = prefs.active_board().await?;
            match resolve_active_board(&boards, persisted.as_deref()) {
                Some(name) => name,
                None => {
                    println!("No boards yet. Add a task to create one.");
                    return Ok(());
                }
            }
        }
    };

    let view = board_view(&tasks, &name);
    print!("{}", render::render_board(&view));
    Ok(())
}

pub async fn add(
    store: &TaskStore,
    prefs: &PrefsStore,
    title: String,
    desc: String,
    status: TaskStatus,
    board: Option<String>,
) -> Result<()> {
    let board = match target_board(store, prefs, board.as_deref()).await? {
        Some(board) => board,
        None => bail!("No active board; pass --board to choose one"),
    };

    let task = store
        .create(NewTask::new(title, board).with_description(desc).with_status(status))
        .await?;
    println!("Created [{}] {} on {}", task.id, task.title, task.board);
    Ok(())
}

pub async fn edit(
    store: &TaskStore,
    id: u64,
    title: Option<String>,
    desc: Option<String>,
    status: Option<TaskStatus>,
    board: Option<String>,
) -> Result<()> {
    if title.is_none() && desc.is_none() && status.is_none() && board.is_none() {
        bail!("Nothing to edit; pass at least one of --title, --desc, --status, --board");
    }

    let patch = TaskPatch {
        title,
        description: desc,
        status,
        board,
    };
    let task = store
        .update(id, patch)
        .await
        .with_context(|| format!("Failed to update task {}", id))?;
    println!("Updated [{}] {}", task.id, task.title);
    Ok(())
}

pub async fn move_task(store: &TaskStore, id: u64, status: TaskStatus) -> Result<()> {
    let patch = TaskPatch {
        status: Some(status),
        ..Default::default()
    };
    let task = store
        .update(id, patch)
        .await
        .with_context(|| format!("Failed to move task {}", id))?;
    println!("Moved '{}' to {}", task.title, column_title(status));
    Ok(())
}

pub async fn rm(store: &TaskStore, id: u64) -> Result<()> {
    let Some(task) = store.get(id).await? else {
        bail!("No task with id {}", id);
    };
    store.delete(id).await?;
    println!("Deleted '{}'", task.title);
    Ok(())
}

pub async fn tasks(
    store: &TaskStore,
    board: Option<&str>,
    status: Option<TaskStatus>,
    json: bool,
) -> Result<()> {
    let mut tasks = store.tasks().await?;
    if let Some(board) = board {
        tasks.retain(|t| t.board == board);
    }
    if let Some(status) = status {
        tasks.retain(|t| t.status == status);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks match.");
        return Ok(());
    }
    print!("{}", render::render_task_list(&tasks));
    Ok(())
}

pub async fn theme(prefs: &PrefsStore, value: Option<Theme>) -> Result<()> {
    match value {
        Some(theme) => {
            prefs.set_theme(theme).await?;
            println!("Theme set to {}", theme);
        }
        None => println!("{}", prefs.theme().await?),
    }
    Ok(())
}

pub async fn sidebar(prefs: &PrefsStore, value: Option<bool>) -> Result<()> {
    match value {
        Some(visible) => {
            prefs.set_sidebar_visible(visible).await?;
            println!("Sidebar {}", if visible { "on" } else { "off" });
        }
        None => {
            let visible = prefs.sidebar_visible().await?;
            println!("{}", if visible { "on" } else { "off" });
        }
    }
    Ok(())
}
