//! Task creation command.
//!
//! Collects the task fields, POSTs them and then reloads the full list so
//! the rendered board reflects the backend's state, id included.

use crate::api::{Gateway, TasksApi};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::task::{Priority, SubTask, Task};
use crate::{msg_error, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct NewArgs {
    #[arg(required = true, help = "Task title")]
    title: String,

    #[arg(long, short, default_value = "", help = "Task description")]
    description: String,

    #[arg(long, short, help = "Due date (YYYY-MM-DD)")]
    term: NaiveDate,

    #[arg(long, short, value_enum, default_value = "media", help = "Task priority")]
    priority: Priority,

    #[arg(long, short, help = "Subtask title; may be given multiple times")]
    subtask: Vec<String>,
}

pub async fn cmd(new_args: NewArgs) -> Result<()> {
    let api = TasksApi::new(Gateway::from_config()?);

    let mut task = Task::new(&new_args.title, &new_args.description, new_args.term, new_args.priority);
    task.sub_tasks = new_args.subtask.iter().map(|title| SubTask::new(title)).collect();

    if let Err(e) = api.create(&task).await {
        msg_error!(Message::TaskCreateFailed(e.to_string()));
        return Ok(());
    }
    msg_success!(Message::TaskCreated(task.title.clone()));

    // Full reload keeps the board backend-authoritative.
    let mut store = TaskStore::new();
    store.replace_all(api.fetch_all().await?);

    super::render_board(&store)
}
