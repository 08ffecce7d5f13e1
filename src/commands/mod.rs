pub mod complete;
pub mod delete;
pub mod edit;
pub mod forum;
pub mod init;
pub mod list;
pub mod new;
pub mod priority;
pub mod stats;
pub mod subtask;

use crate::libs::board::Board;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the task board grouped by priority")]
    List,
    #[command(about = "Create a new task")]
    New(new::NewArgs),
    #[command(about = "Toggle a task between complete and open")]
    Complete(complete::CompleteArgs),
    #[command(about = "Change the priority of an open task")]
    Priority(priority::PriorityArgs),
    #[command(about = "Toggle a subtask checkbox")]
    Subtask(subtask::SubtaskArgs),
    #[command(about = "Edit title, description or due date of a task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Forum discussions")]
    Forum(forum::ForumArgs),
    #[command(about = "Completion statistics")]
    Stats,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::List => list::cmd().await,
            Commands::New(args) => new::cmd(args).await,
            Commands::Complete(args) => complete::cmd(args).await,
            Commands::Priority(args) => priority::cmd(args).await,
            Commands::Subtask(args) => subtask::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Forum(args) => forum::cmd(args).await,
            Commands::Stats => stats::cmd().await,
        }
    }
}

/// Renders the current store as a priority board, or the empty placeholder
/// when no tasks exist.
pub(crate) fn render_board(store: &TaskStore) -> Result<()> {
    if store.is_empty() {
        msg_print!(Message::TasksEmpty);
        return Ok(());
    }

    let today = Local::now().date_naive();
    View::board(&Board::build(store.tasks(), today), today)
}
