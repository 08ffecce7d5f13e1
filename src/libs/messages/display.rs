//! Display implementation for prazo application messages.
//!
//! Central place for all user-facing text. Board placeholders keep the
//! backend UI's Portuguese wording; operational messages follow the rest
//! of the CLI in English.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created successfully", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated successfully", title),
            Message::TaskDeleted(id) => format!("Task {} deleted successfully", id),
            Message::TaskReopened(title) => format!("Task '{}' reopened", title),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskNotFoundWithId(id) => format!("Task with id {} not found.", id),
            Message::TaskCreateFailed(error) => format!("Failed to create task: {}", error),
            Message::TaskUpdateFailed(error) => format!("Failed to update task: {}", error),
            Message::TaskDeleteFailed(error) => format!("Failed to delete task: {}", error),
            Message::TasksEmpty => "Nenhuma tarefa criada. Comece agora!".to_string(),
            Message::TasksReadFailed => "Erro ao ler tarefas".to_string(),
            Message::SubtaskNotFound(task_id, subtask_id) => format!("Subtask {} not found in task {}.", subtask_id, task_id),
            Message::SubtaskToggled(title) => format!("Subtask '{}' toggled", title),
            Message::PriorityLockedForCompleted(id) => format!("Task {} is completed; reopen it before changing its priority.", id),
            Message::PriorityChanged(title, priority) => format!("Task '{}' priority set to {}", title, priority),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete task '{}'?", title),
            Message::DeleteAborted => "Deletion aborted.".to_string(),

            // === FORUM MESSAGES ===
            Message::DiscussionCreated => "Discussion created successfully".to_string(),
            Message::DiscussionUpdated(id) => format!("Discussion {} updated successfully", id),
            Message::DiscussionDeleted(id) => format!("Discussion {} deleted successfully", id),
            Message::DiscussionsEmptyPage(page) => format!("No discussions on page {}.", page),
            Message::DiscussionCreateFailed(error) => format!("Failed to create discussion: {}", error),
            Message::DiscussionUpdateFailed(error) => format!("Failed to update discussion: {}", error),
            Message::DiscussionDeleteFailed(error) => format!("Failed to delete discussion: {}", error),
            Message::DiscussionsReadFailed(error) => format!("Failed to read discussions: {}", error),
            Message::ConfirmDeleteDiscussion(id) => format!("Are you sure you want to delete discussion {}?", id),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleForum => "Forum settings".to_string(),
            Message::ConfigServerMissing => "Backend server is not configured. Run 'prazo init' first.".to_string(),
            Message::ConfigForumMissing => "Forum author id is not configured. Run 'prazo init' first.".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptServerApiUrl => "Enter the backend API URL".to_string(),
            Message::PromptForumAuthorId => "Enter your forum author id".to_string(),

            // === STATS MESSAGES ===
            Message::StatsHeader(date) => format!("Task statistics for {}", date),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskTerm => "Due date (YYYY-MM-DD)".to_string(),
            Message::InvalidDate(value) => format!("Invalid date '{}', expected YYYY-MM-DD.", value),
        };
        write!(f, "{}", text)
    }
}
