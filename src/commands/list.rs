//! Task board display command.
//!
//! The one read path with user-visible error messaging: a failed or
//! malformed fetch replaces the board with a placeholder string instead of
//! structured error data.

use crate::api::{Gateway, TasksApi};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_debug, msg_error};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let api = TasksApi::new(Gateway::from_config()?);

    let mut store = TaskStore::new();
    match api.fetch_all().await {
        Ok(tasks) => store.replace_all(tasks),
        Err(e) => {
            msg_debug!(format!("task fetch failed: {}", e));
            msg_error!(Message::TasksReadFailed);
            return Ok(());
        }
    }

    super::render_board(&store)
}
