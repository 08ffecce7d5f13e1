//! Subtask checkbox toggle command.
//!
//! Subtasks are addressed by their stable id, never by position, so the
//! toggle touches exactly one (task, subtask) pair.

use crate::api::{Gateway, TasksApi};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_bail_anyhow, msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SubtaskArgs {
    #[arg(required = true, help = "Task id")]
    task_id: String,

    #[arg(required = true, help = "Subtask id")]
    subtask_id: String,
}

pub async fn cmd(subtask_args: SubtaskArgs) -> Result<()> {
    let api = TasksApi::new(Gateway::from_config()?);

    let mut store = TaskStore::new();
    store.replace_all(api.fetch_all().await?);

    let Some(task) = store.get(&subtask_args.task_id) else {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(subtask_args.task_id));
    };

    let mut updated = task.clone();
    if !updated.toggle_subtask(&subtask_args.subtask_id) {
        msg_bail_anyhow!(Message::SubtaskNotFound(subtask_args.task_id, subtask_args.subtask_id));
    }

    let toggled_title = updated
        .sub_tasks
        .iter()
        .find(|st| st.id == subtask_args.subtask_id)
        .map(|st| st.title.clone())
        .unwrap_or_default();

    match api.update(&subtask_args.task_id, &updated).await {
        Ok(confirmed) => {
            store.replace(&subtask_args.task_id, confirmed);
            msg_success!(Message::SubtaskToggled(toggled_title));
        }
        Err(e) => {
            msg_error!(Message::TaskUpdateFailed(e.to_string()));
            return Ok(());
        }
    }

    super::render_board(&store)
}
