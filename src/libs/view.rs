use super::board::Board;
use super::discussion::Discussion;
use super::formatter::format_due;
use super::task::Task;
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints the task board, one table per non-empty bucket.
    pub fn board(board: &Board, today: NaiveDate) -> Result<()> {
        for (bucket, tasks) in board.groups() {
            println!("\n{}", bucket);
            let mut table = Table::new();

            table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DUE", "PRIORITY", "SUBTASKS"]);
            for task in tasks {
                let due = if task.complete { "-".to_string() } else { format_due(task.term, today) };
                table.add_row(row![
                    task.id.as_deref().unwrap_or("-"),
                    task.title,
                    task.description,
                    due,
                    task.priority,
                    Self::subtask_cell(task)
                ]);
            }
            table.printstd();
        }

        Ok(())
    }

    /// Prints one page of the forum listing.
    pub fn discussions(discussions: &[Discussion], page: u32) -> Result<()> {
        println!("\nDiscussions, page {}", page);
        let mut table = Table::new();

        table.add_row(row!["ID", "AUTHOR", "TITLE", "CONTENT"]);
        for discussion in discussions {
            table.add_row(row![
                discussion.id.as_deref().unwrap_or("-"),
                discussion.author_id,
                discussion.title,
                discussion.content
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints the completion statistics summary.
    pub fn stats(total: usize, total_complete: usize, due_today: usize, due_today_complete: usize) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "TOTAL", "COMPLETE"]);
        table.add_row(row!["All tasks", total, total_complete]);
        table.add_row(row!["Due today", due_today, due_today_complete]);
        table.printstd();

        Ok(())
    }

    /// One line per subtask, checkbox plus title plus stable id.
    fn subtask_cell(task: &Task) -> String {
        task.sub_tasks
            .iter()
            .map(|st| format!("[{}] {} ({})", if st.complete { "x" } else { " " }, st.title, st.id))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
