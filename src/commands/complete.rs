//! Completion toggle command.
//!
//! Flips `complete` on a copy of the record, PUTs the full task and only
//! then swaps the local record for the server's response. A failed round
//! trip leaves the store untouched.

use crate::api::{Gateway, TasksApi};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_bail_anyhow, msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    #[arg(required = true, help = "Task id")]
    id: String,
}

pub async fn cmd(complete_args: CompleteArgs) -> Result<()> {
    let api = TasksApi::new(Gateway::from_config()?);

    let mut store = TaskStore::new();
    store.replace_all(api.fetch_all().await?);

    let Some(task) = store.get(&complete_args.id) else {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(complete_args.id));
    };

    let mut updated = task.clone();
    updated.complete = !updated.complete;

    match api.update(&complete_args.id, &updated).await {
        Ok(confirmed) => {
            let message = if confirmed.complete {
                Message::TaskCompleted(confirmed.title.clone())
            } else {
                Message::TaskReopened(confirmed.title.clone())
            };
            store.replace(&complete_args.id, confirmed);
            msg_success!(message);
        }
        Err(e) => {
            msg_error!(Message::TaskUpdateFailed(e.to_string()));
            return Ok(());
        }
    }

    super::render_board(&store)
}
