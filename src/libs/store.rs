//! In-memory task store, the single source of truth for rendering.
//!
//! The store holds the last server-confirmed task sequence. It is refreshed
//! wholesale after a load, create or delete, and patched record-by-record
//! after an update, always with the body the backend returned. Commands own
//! a store and pass it around explicitly; there is no process-wide state.

use super::task::Task;

#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire sequence, keeping the backend's order.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id.as_deref() == Some(id))
    }

    /// Swaps one record with the server's canonical copy after a
    /// successful mutation. Returns `false` when the id is unknown.
    pub fn replace(&mut self, id: &str, task: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id.as_deref() == Some(id)) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}
