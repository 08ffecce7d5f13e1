//! # Prazo - priority task board and forum client
//!
//! A command-line client for a json-server style REST backend, rendering
//! tasks grouped into priority buckets and a paginated discussion listing.
//!
//! ## Features
//!
//! - **Task Board**: Tasks sorted by priority and grouped into overdue,
//!   per-priority and completed buckets with due-date countdowns
//! - **Task Management**: Create, edit, complete and delete tasks, with
//!   subtask checkboxes addressed by stable identifiers
//! - **Forum**: Paginated discussion listing and discussion CRUD
//! - **Statistics**: Daily and overall completion counts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use prazo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
