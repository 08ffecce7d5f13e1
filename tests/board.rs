#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use prazo::libs::board::{assign_bucket, Board, Bucket};
    use prazo::libs::task::{Priority, Task};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: &str, term: NaiveDate, priority: Priority, complete: bool) -> Task {
        let mut task = Task::new(&format!("Task {}", id), "", term, priority);
        task.id = Some(id.to_string());
        task.complete = complete;
        task
    }

    #[test]
    fn test_completed_tasks_go_to_done_bucket() {
        let today = date(2026, 8, 29);
        // Completion wins over both overdue terms and priority.
        for priority in [Priority::Alta, Priority::Media, Priority::Baixa] {
            for term in [date(2026, 8, 1), today, date(2026, 9, 10)] {
                let t = task("1", term, priority, true);
                assert_eq!(assign_bucket(&t, today), Bucket::Concluidas);
            }
        }
    }

    #[test]
    fn test_overdue_tasks_go_to_overdue_bucket() {
        let today = date(2026, 8, 29);
        for priority in [Priority::Alta, Priority::Media, Priority::Baixa] {
            let t = task("1", date(2026, 8, 28), priority, false);
            assert_eq!(assign_bucket(&t, today), Bucket::Atrasadas);
        }
    }

    #[test]
    fn test_open_tasks_go_to_their_priority_bucket() {
        let today = date(2026, 8, 29);
        // Due today is not overdue; strictly-before comparison.
        for term in [today, date(2026, 9, 5)] {
            assert_eq!(assign_bucket(&task("1", term, Priority::Alta, false), today), Bucket::Alta);
            assert_eq!(assign_bucket(&task("2", term, Priority::Media, false), today), Bucket::Media);
            assert_eq!(assign_bucket(&task("3", term, Priority::Baixa, false), today), Bucket::Baixa);
        }
    }

    #[test]
    fn test_board_sorts_by_priority_rank() {
        let today = date(2026, 8, 29);
        let tomorrow = date(2026, 8, 30);
        let tasks = vec![
            task("b1", tomorrow, Priority::Baixa, false),
            task("a1", tomorrow, Priority::Alta, false),
            task("m1", tomorrow, Priority::Media, false),
        ];

        let board = Board::build(&tasks, today);
        let buckets: Vec<Bucket> = board.groups().iter().map(|(bucket, _)| *bucket).collect();
        assert_eq!(buckets, vec![Bucket::Alta, Bucket::Media, Bucket::Baixa]);
    }

    #[test]
    fn test_stable_sort_keeps_insertion_order_within_priority() {
        let today = date(2026, 8, 29);
        let tomorrow = date(2026, 8, 30);
        let tasks = vec![
            task("m1", tomorrow, Priority::Media, false),
            task("a1", tomorrow, Priority::Alta, false),
            task("m2", tomorrow, Priority::Media, false),
            task("m3", tomorrow, Priority::Media, false),
        ];

        let board = Board::build(&tasks, today);
        let media = board.groups().iter().find(|(bucket, _)| *bucket == Bucket::Media).unwrap();
        let ids: Vec<&str> = media.1.iter().map(|t| t.id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn test_empty_buckets_are_omitted() {
        let today = date(2026, 8, 29);
        let tasks = vec![task("a1", date(2026, 8, 30), Priority::Alta, false)];

        let board = Board::build(&tasks, today);
        assert_eq!(board.groups().len(), 1);
        assert_eq!(board.groups()[0].0, Bucket::Alta);
    }

    #[test]
    fn test_mixed_board_groups_every_task_exactly_once() {
        let today = date(2026, 8, 29);
        let tasks = vec![
            task("done", date(2026, 8, 1), Priority::Alta, true),
            task("late", date(2026, 8, 1), Priority::Baixa, false),
            task("alta", date(2026, 9, 1), Priority::Alta, false),
            task("media", date(2026, 9, 1), Priority::Media, false),
            task("baixa", date(2026, 9, 1), Priority::Baixa, false),
        ];

        let board = Board::build(&tasks, today);
        let total: usize = board.groups().iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, tasks.len());

        let buckets: Vec<Bucket> = board.groups().iter().map(|(bucket, _)| *bucket).collect();
        assert_eq!(buckets, vec![Bucket::Atrasadas, Bucket::Alta, Bucket::Media, Bucket::Baixa, Bucket::Concluidas]);
    }
}
