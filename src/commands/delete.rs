//! Task deletion command.
//!
//! Asks for confirmation, issues the DELETE and then performs a full
//! reload instead of removing the record locally, trading one extra round
//! trip for a backend-authoritative board.

use crate::api::{Gateway, TasksApi};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_bail_anyhow, msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(required = true, help = "Task id")]
    id: String,

    #[arg(short, long, help = "Skip the confirmation prompt")]
    yes: bool,
}

pub async fn cmd(delete_args: DeleteArgs) -> Result<()> {
    let api = TasksApi::new(Gateway::from_config()?);

    let mut store = TaskStore::new();
    store.replace_all(api.fetch_all().await?);

    let Some(task) = store.get(&delete_args.id) else {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(delete_args.id));
    };

    if !delete_args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_print!(Message::DeleteAborted);
            return Ok(());
        }
    }

    if let Err(e) = api.delete(&delete_args.id).await {
        msg_error!(Message::TaskDeleteFailed(e.to_string()));
        return Ok(());
    }
    msg_success!(Message::TaskDeleted(delete_args.id.clone()));

    store.replace_all(api.fetch_all().await?);

    super::render_board(&store)
}
