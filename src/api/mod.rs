//! HTTP gateway to the JSON document store backend.
//!
//! The backend is a generic REST-style store (json-server shaped): plain
//! `GET/POST/PUT/DELETE` verbs on collection paths, JSON bodies both ways.
//! [`Gateway`] offers one method per verb and parses responses into typed
//! values; [`TasksApi`] and [`DiscussionsApi`] build the collection-specific
//! paths on top of it.
//!
//! Failures fall into three categories, surfaced as [`ApiError`]: the
//! request never completed (network), the server answered with a non-2xx
//! status, or the body was not the expected JSON shape.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub mod discussions;
pub mod tasks;

pub use discussions::DiscussionsApi;
pub use tasks::TasksApi;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Thin typed wrapper over the backend's HTTP verbs.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: Client,
    base_url: String,
}

impl Gateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds a gateway from the configured backend server.
    pub fn from_config() -> anyhow::Result<Self> {
        let config = Config::read()?;
        match config.server {
            Some(server) => Ok(Self::new(&server.api_url)),
            None => Err(msg_error_anyhow!(Message::ConfigServerMissing)),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::parse(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::parse(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::parse(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.client.delete(self.url(path)).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    /// Checks the status and decodes the JSON body.
    ///
    /// The body is read as text first so that a malformed payload shows up
    /// as [`ApiError::Parse`] rather than a generic request error.
    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
