//! Client for the task collection endpoint.
//!
//! Updates always PUT the full task object and hand back the body the
//! server returned, which becomes the canonical local copy. Creation and
//! deletion are followed by a full re-fetch on the caller's side, keeping
//! the store backend-authoritative.

use super::{ApiError, Gateway};
use crate::libs::task::Task;

const TASKS_URL: &str = "tasks";

#[derive(Debug, Clone)]
pub struct TasksApi {
    gateway: Gateway,
}

impl TasksApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /tasks` — the full task array.
    pub async fn fetch_all(&self) -> Result<Vec<Task>, ApiError> {
        self.gateway.get(TASKS_URL).await
    }

    /// `POST /tasks` — returns the created task with its assigned id.
    pub async fn create(&self, task: &Task) -> Result<Task, ApiError> {
        self.gateway.post(TASKS_URL, task).await
    }

    /// `PUT /tasks/{id}` — full-object update, returns the updated task.
    pub async fn update(&self, id: &str, task: &Task) -> Result<Task, ApiError> {
        self.gateway.put(&format!("{}/{}", TASKS_URL, id), task).await
    }

    /// `DELETE /tasks/{id}`.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.gateway.delete(&format!("{}/{}", TASKS_URL, id)).await
    }
}
