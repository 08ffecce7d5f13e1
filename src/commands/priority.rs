//! Priority change command.
//!
//! Priority can only change on open tasks; the board disables the selector
//! for completed ones and the command enforces the same rule.

use crate::api::{Gateway, TasksApi};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::task::Priority;
use crate::{msg_bail_anyhow, msg_error, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PriorityArgs {
    #[arg(required = true, help = "Task id")]
    id: String,

    #[arg(required = true, value_enum, help = "New priority")]
    priority: Priority,
}

pub async fn cmd(priority_args: PriorityArgs) -> Result<()> {
    let api = TasksApi::new(Gateway::from_config()?);

    let mut store = TaskStore::new();
    store.replace_all(api.fetch_all().await?);

    let Some(task) = store.get(&priority_args.id) else {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(priority_args.id));
    };

    if task.complete {
        msg_warning!(Message::PriorityLockedForCompleted(priority_args.id));
        return Ok(());
    }

    let mut updated = task.clone();
    updated.priority = priority_args.priority;

    match api.update(&priority_args.id, &updated).await {
        Ok(confirmed) => {
            msg_success!(Message::PriorityChanged(confirmed.title.clone(), confirmed.priority.to_string()));
            store.replace(&priority_args.id, confirmed);
        }
        Err(e) => {
            msg_error!(Message::TaskUpdateFailed(e.to_string()));
            return Ok(());
        }
    }

    super::render_board(&store)
}
