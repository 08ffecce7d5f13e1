//! Configuration management for the prazo application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory. Two optional modules exist: the backend server (base URL of
//! the JSON document store) and the forum identity (the author id whose
//! discussions are excluded from the listing). Both can be set up through
//! the interactive `init` wizard.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module during interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Backend server connection parameters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the JSON document store, e.g. `http://localhost:3000`.
    /// Collection paths (`/tasks`, `/discussions`) are appended to it.
    pub api_url: String,
}

impl ServerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "server".to_string(),
            name: "Server".to_string(),
        }
    }

    pub fn init(config: &Option<ServerConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: "http://localhost:3000".to_string(),
        });

        msg_print!(Message::ConfigModuleServer);

        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}

/// Forum identity used by the discussion listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ForumConfig {
    /// The current user's author id; the listing excludes this author.
    pub author_id: String,
}

impl ForumConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "forum".to_string(),
            name: "Forum".to_string(),
        }
    }

    pub fn init(config: &Option<ForumConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self { author_id: "".to_string() });

        msg_print!(Message::ConfigModuleForum);

        Ok(Self {
            author_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptForumAuthorId.to_string())
                .default(config.author_id)
                .interact_text()?,
        })
    }
}

/// Main configuration container.
///
/// Unconfigured modules are omitted from the JSON output entirely.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forum: Option<ForumConfig>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when the
    /// file does not exist yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![ServerConfig::module(), ForumConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "server" => config.server = Some(ServerConfig::init(&config.server)?),
                "forum" => config.forum = Some(ForumConfig::init(&config.forum)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
