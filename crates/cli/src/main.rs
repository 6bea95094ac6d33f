//! Taskboard CLI
//!
//! Terminal front end for the task store: renders boards as text columns
//! and exposes the create/edit/move/delete flows as subcommands.

mod commands;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tb_core::prefs::{PrefsStore, Theme};
use tb_core::storage::{FileStore, KeyValueStore};
use tb_core::task::{TaskStatus, TaskStore};

#[derive(Parser)]
#[command(name = "taskboard", version, about = "Kanban task board for the terminal")]
struct Cli {
    /// Directory holding the persisted store
    #[arg(long, env = "TB_DATA_DIR", default_value = ".tb-data", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List boards, marking the active one
    Boards,
    /// Select the active board
    Use {
        /// Board name as shown by `boards`
        board: String,
    },
    /// Render a board as columns
    Show {
        /// Board to render; defaults to the active board
        board: Option<String>,
    },
    /// Create a task
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(long, short = 'd', value_name = "TEXT", default_value = "")]
        desc: String,
        /// Column the task starts in
        #[arg(long, short = 's', value_enum, default_value = "todo")]
        status: StatusArg,
        /// Board to add to; defaults to the active board
        #[arg(long, short = 'b')]
        board: Option<String>,
    },
    /// Edit fields of a task
    Edit {
        /// Task id
        id: u64,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long, short = 'd', value_name = "TEXT")]
        desc: Option<String>,
        /// New column
        #[arg(long, short = 's', value_enum)]
        status: Option<StatusArg>,
        /// New board
        #[arg(long, short = 'b')]
        board: Option<String>,
    },
    /// Move a task to another column
    Move {
        /// Task id
        id: u64,
        /// Target column
        #[arg(value_enum)]
        status: StatusArg,
    },
    /// Delete a task
    Rm {
        /// Task id
        id: u64,
    },
    /// List tasks across boards
    Tasks {
        /// Only tasks on this board
        #[arg(long, short = 'b')]
        board: Option<String>,
        /// Only tasks in this column
        #[arg(long, short = 's', value_enum)]
        status: Option<StatusArg>,
        /// Print raw JSON records instead of rows
        #[arg(long)]
        json: bool,
    },
    /// Show or set the color theme
    Theme {
        /// New theme; prints the current one when omitted
        #[arg(value_enum)]
        value: Option<ThemeArg>,
    },
    /// Show or toggle sidebar visibility
    Sidebar {
        /// New visibility; prints the current one when omitted
        #[arg(value_enum)]
        value: Option<SidebarArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Todo,
    Doing,
    Done,
}

impl From<StatusArg> for TaskStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Todo => TaskStatus::Todo,
            StatusArg::Doing => TaskStatus::Doing,
            StatusArg::Done => TaskStatus::Done,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SidebarArg {
    On,
    Off,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=info,tb_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let store_path = cli.data_dir.join("store.json");
    tracing::debug!("Using store at {}", store_path.display());

    let kv: Arc<dyn KeyValueStore> = Arc::new(
        FileStore::new(&store_path)
            .await
            .with_context(|| format!("Failed to open store at {}", store_path.display()))?,
    );
    let tasks = TaskStore::with_seed(Arc::clone(&kv))
        .await
        .context("Failed to initialize task store")?;
    let prefs = PrefsStore::new(kv);

    match cli.command {
        Command::Boards => commands::boards(&tasks, &prefs).await,
        Command::Use { board } => commands::use_board(&tasks, &prefs, &board).await,
        Command::Show { board } => commands::show(&tasks, &prefs, board.as_deref()).await,
        Command::Add {
            title,
            desc,
            status,
            board,
        } => commands::add(&tasks, &prefs, title, desc, status.into(), board).await,
        Command::Edit {
            id,
            title,
            desc,
            status,
            board,
        } => commands::edit(&tasks, id, title, desc, status.map(Into::into), board).await,
        Command::Move { id, status } => commands::move_task(&tasks, id, status.into()).await,
        Command::Rm { id } => commands::rm(&tasks, id).await,
        Command::Tasks { board, status, json } => {
            commands::tasks(&tasks, board.as_deref(), status.map(Into::into), json).await
        }
        Command::Theme { value } => commands::theme(&prefs, value.map(Into::into)).await,
        Command::Sidebar { value } => {
            commands::sidebar(&prefs, value.map(|v| matches!(v, SidebarArg::On))).await
        }
    }
}
