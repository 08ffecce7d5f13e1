//! Completion statistics command.
//!
//! Fetches the full task list and reports overall and today's completion
//! counts, the dashboard numbers of the original home screen.

use crate::api::{Gateway, TasksApi};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_debug, msg_error, msg_print};
use anyhow::Result;
use chrono::Local;

pub async fn cmd() -> Result<()> {
    let api = TasksApi::new(Gateway::from_config()?);

    let tasks = match api.fetch_all().await {
        Ok(tasks) => tasks,
        Err(e) => {
            msg_debug!(format!("task fetch failed: {}", e));
            msg_error!(Message::TasksReadFailed);
            return Ok(());
        }
    };

    let today = Local::now().date_naive();
    let total = tasks.len();
    let total_complete = tasks.iter().filter(|task| task.complete).count();
    let due_today = tasks.iter().filter(|task| task.term == today).count();
    let due_today_complete = tasks.iter().filter(|task| task.term == today && task.complete).count();

    msg_print!(Message::StatsHeader(today.format("%Y-%m-%d").to_string()), true);
    View::stats(total, total_complete, due_today, due_today_complete)
}
