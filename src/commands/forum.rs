//! Forum discussion commands.
//!
//! Thin wrappers over the discussion gateway: a paginated listing that
//! excludes the configured author, plus create, edit and delete.

use crate::api::{DiscussionsApi, Gateway};
use crate::libs::config::Config;
use crate::libs::discussion::Discussion;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ForumArgs {
    #[command(subcommand)]
    command: ForumCommands,
}

#[derive(Debug, Subcommand)]
enum ForumCommands {
    #[command(about = "List a page of discussions from other authors")]
    List(ListArgs),
    #[command(about = "Start a new discussion")]
    New(NewArgs),
    #[command(about = "Edit a discussion")]
    Edit(EditArgs),
    #[command(about = "Delete a discussion")]
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    #[arg(long, short, default_value = "1", help = "Page number (5 discussions per page)")]
    page: u32,
}

#[derive(Debug, Args)]
struct NewArgs {
    #[arg(required = true, help = "Discussion title")]
    title: String,

    #[arg(required = true, help = "Discussion content")]
    content: String,
}

#[derive(Debug, Args)]
struct EditArgs {
    #[arg(required = true, help = "Discussion id")]
    id: String,

    #[arg(long, help = "New title")]
    title: Option<String>,

    #[arg(long, help = "New content")]
    content: Option<String>,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    #[arg(required = true, help = "Discussion id")]
    id: String,

    #[arg(short, long, help = "Skip the confirmation prompt")]
    yes: bool,
}

pub async fn cmd(forum_args: ForumArgs) -> Result<()> {
    let api = DiscussionsApi::new(Gateway::from_config()?);
    let author_id = author_id()?;

    match forum_args.command {
        ForumCommands::List(args) => {
            let discussions = match api.fetch_page(args.page, &author_id).await {
                Ok(discussions) => discussions,
                Err(e) => {
                    msg_error!(Message::DiscussionsReadFailed(e.to_string()));
                    return Ok(());
                }
            };
            if discussions.is_empty() {
                msg_print!(Message::DiscussionsEmptyPage(args.page));
                return Ok(());
            }
            View::discussions(&discussions, args.page)
        }
        ForumCommands::New(args) => {
            let discussion = Discussion::new(&author_id, &args.title, &args.content);
            if let Err(e) = api.create(&discussion).await {
                msg_error!(Message::DiscussionCreateFailed(e.to_string()));
                return Ok(());
            }
            msg_success!(Message::DiscussionCreated);
            Ok(())
        }
        ForumCommands::Edit(args) => {
            // PUT replaces the whole document, so start from the current one.
            let mut discussion = match api.fetch_one(&args.id).await {
                Ok(discussion) => discussion,
                Err(e) => {
                    msg_error!(Message::DiscussionsReadFailed(e.to_string()));
                    return Ok(());
                }
            };
            if let Some(title) = args.title {
                discussion.title = title;
            }
            if let Some(content) = args.content {
                discussion.content = content;
            }
            match api.update(&args.id, &discussion).await {
                Ok(_) => msg_success!(Message::DiscussionUpdated(args.id)),
                Err(e) => msg_error!(Message::DiscussionUpdateFailed(e.to_string())),
            }
            Ok(())
        }
        ForumCommands::Delete(args) => {
            if !args.yes {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteDiscussion(args.id.clone()).to_string())
                    .default(false)
                    .interact()?;
                if !confirmed {
                    msg_print!(Message::DeleteAborted);
                    return Ok(());
                }
            }
            match api.delete(&args.id).await {
                Ok(()) => msg_success!(Message::DiscussionDeleted(args.id)),
                Err(e) => msg_error!(Message::DiscussionDeleteFailed(e.to_string())),
            }
            Ok(())
        }
    }
}

fn author_id() -> Result<String> {
    match Config::read()?.forum {
        Some(forum) => Ok(forum.author_id),
        None => msg_bail_anyhow!(Message::ConfigForumMissing),
    }
}
