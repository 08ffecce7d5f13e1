//! Task and subtask wire types shared with the JSON backend.
//!
//! Field names follow the backend contract exactly: `subTasks` is camelCase
//! on the wire and priority values travel lowercase (`alta`, `media`,
//! `baixa`). The `id` is assigned by the server and is therefore absent
//! from the body of a create request.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Task priority levels, ordered from most to least urgent.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Alta,
    Media,
    Baixa,
}

impl Priority {
    /// Sort rank used by the board: alta=1, media=2, baixa=3.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Alta => 1,
            Priority::Media => 2,
            Priority::Baixa => 3,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Priority::Alta => "Alta",
            Priority::Media => "Média",
            Priority::Baixa => "Baixa",
        };
        write!(f, "{}", label)
    }
}

/// A checklist item inside a task.
///
/// Subtasks carry a stable identifier so that toggling one is never a
/// matter of positional index within the parent's sequence.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SubTask {
    pub id: String,
    pub title: String,
    pub complete: bool,
}

impl SubTask {
    pub fn new(title: &str) -> Self {
        SubTask {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            complete: false,
        }
    }
}

/// A task record as stored by the backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Task {
    /// Server-assigned identifier; `None` until the task has been created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    /// Due date, ISO `YYYY-MM-DD`.
    pub term: NaiveDate,
    pub priority: Priority,
    pub complete: bool,
    #[serde(rename = "subTasks", default)]
    pub sub_tasks: Vec<SubTask>,
}

impl Task {
    pub fn new(title: &str, description: &str, term: NaiveDate, priority: Priority) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            term,
            priority,
            complete: false,
            sub_tasks: Vec::new(),
        }
    }

    /// Toggles a subtask by its stable id. Returns `false` when the id is
    /// not part of this task, leaving every sibling untouched.
    pub fn toggle_subtask(&mut self, subtask_id: &str) -> bool {
        match self.sub_tasks.iter_mut().find(|st| st.id == subtask_id) {
            Some(subtask) => {
                subtask.complete = !subtask.complete;
                true
            }
            None => false,
        }
    }
}
