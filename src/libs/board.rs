//! Priority board: sorting and bucket assignment for task rendering.
//!
//! Every task lands in exactly one bucket per render, computed from its
//! completion state, its due date against today and its priority:
//!
//! - completed tasks go to [`Bucket::Concluidas`];
//! - incomplete tasks whose term is strictly before today go to
//!   [`Bucket::Atrasadas`];
//! - everything else goes to the bucket matching its priority.
//!
//! Tasks are stable-sorted by priority rank before grouping, so ties keep
//! their prior relative order. Buckets that receive no tasks are omitted
//! from the grouped output.

use super::task::{Priority, Task};
use chrono::NaiveDate;
use std::fmt::{Display, Formatter};

/// Display buckets of the task board, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Atrasadas,
    Alta,
    Media,
    Baixa,
    Concluidas,
}

/// All buckets in the order they are rendered.
pub const BUCKETS: [Bucket; 5] = [Bucket::Atrasadas, Bucket::Alta, Bucket::Media, Bucket::Baixa, Bucket::Concluidas];

impl Display for Bucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Bucket::Atrasadas => "Atrasadas",
            Bucket::Alta => "Alta",
            Bucket::Media => "Média",
            Bucket::Baixa => "Baixa",
            Bucket::Concluidas => "Concluídas",
        };
        write!(f, "{}", label)
    }
}

/// Computes the bucket a task belongs to for a given `today`.
pub fn assign_bucket(task: &Task, today: NaiveDate) -> Bucket {
    if task.complete {
        return Bucket::Concluidas;
    }
    if task.term < today {
        return Bucket::Atrasadas;
    }
    match task.priority {
        Priority::Alta => Bucket::Alta,
        Priority::Media => Bucket::Media,
        Priority::Baixa => Bucket::Baixa,
    }
}

/// Tasks grouped into non-empty buckets, ready for rendering.
#[derive(Debug)]
pub struct Board {
    groups: Vec<(Bucket, Vec<Task>)>,
}

impl Board {
    /// Groups a task sequence into buckets.
    ///
    /// The input order is preserved within each bucket apart from the
    /// stable sort by priority rank.
    pub fn build(tasks: &[Task], today: NaiveDate) -> Self {
        let mut sorted: Vec<Task> = tasks.to_vec();
        sorted.sort_by_key(|task| task.priority.rank());

        let mut groups = Vec::new();
        for bucket in BUCKETS {
            let members: Vec<Task> = sorted.iter().filter(|task| assign_bucket(task, today) == bucket).cloned().collect();
            if !members.is_empty() {
                groups.push((bucket, members));
            }
        }

        Board { groups }
    }

    /// Non-empty buckets in rendering order.
    pub fn groups(&self) -> &[(Bucket, Vec<Task>)] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
