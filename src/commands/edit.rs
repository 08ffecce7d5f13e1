//! Task editing command.
//!
//! Title, description and due date can be set through flags; when no flag
//! is given the command falls back to interactive prompts pre-filled with
//! the current values, the CLI counterpart of the edit form.

use crate::api::{Gateway, TasksApi};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_bail_anyhow, msg_error, msg_print, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(required = true, help = "Task id")]
    id: String,

    #[arg(long, help = "New title")]
    title: Option<String>,

    #[arg(long, help = "New description")]
    description: Option<String>,

    #[arg(long, help = "New due date (YYYY-MM-DD)")]
    term: Option<NaiveDate>,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.term.is_some()
    }
}

pub async fn cmd(edit_args: EditArgs) -> Result<()> {
    let api = TasksApi::new(Gateway::from_config()?);

    let mut store = TaskStore::new();
    store.replace_all(api.fetch_all().await?);

    let Some(task) = store.get(&edit_args.id) else {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(edit_args.id));
    };

    let mut updated = task.clone();
    if edit_args.has_changes() {
        if let Some(title) = edit_args.title {
            updated.title = title;
        }
        if let Some(description) = edit_args.description {
            updated.description = description;
        }
        if let Some(term) = edit_args.term {
            updated.term = term;
        }
    } else {
        updated.title = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .default(updated.title)
            .interact_text()?;
        updated.description = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDescription.to_string())
            .default(updated.description)
            .interact_text()?;
        let term: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTerm.to_string())
            .default(updated.term.format("%Y-%m-%d").to_string())
            .interact_text()?;
        updated.term = match NaiveDate::parse_from_str(&term, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => msg_bail_anyhow!(Message::InvalidDate(term)),
        };
    }

    if &updated == task {
        msg_print!(Message::NoChangesDetected);
        return Ok(());
    }

    match api.update(&edit_args.id, &updated).await {
        Ok(confirmed) => {
            msg_success!(Message::TaskUpdated(confirmed.title.clone()));
            store.replace(&edit_args.id, confirmed);
        }
        Err(e) => {
            msg_error!(Message::TaskUpdateFailed(e.to_string()));
            return Ok(());
        }
    }

    super::render_board(&store)
}
