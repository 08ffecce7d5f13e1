#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use prazo::libs::store::TaskStore;
    use prazo::libs::task::{Priority, SubTask, Task};

    fn term() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    fn task(id: &str) -> Task {
        let mut task = Task::new(&format!("Task {}", id), "", term(), Priority::Media);
        task.id = Some(id.to_string());
        task
    }

    #[test]
    fn test_replace_swaps_exactly_one_record() {
        let mut store = TaskStore::new();
        store.replace_all(vec![task("1"), task("2"), task("3")]);

        let mut updated = task("2");
        updated.complete = true;
        assert!(store.replace("2", updated));

        assert!(store.get("2").unwrap().complete);
        assert!(!store.get("1").unwrap().complete);
        assert!(!store.get("3").unwrap().complete);
    }

    #[test]
    fn test_replace_unknown_id_is_rejected() {
        let mut store = TaskStore::new();
        store.replace_all(vec![task("1")]);

        assert!(!store.replace("missing", task("1")));
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_complete_toggle_twice_restores_original_state() {
        // The toggle round trip: clone, flip, replace with the confirmed copy.
        let mut store = TaskStore::new();
        store.replace_all(vec![task("1")]);
        let original = store.get("1").unwrap().complete;

        for _ in 0..2 {
            let mut updated = store.get("1").unwrap().clone();
            updated.complete = !updated.complete;
            store.replace("1", updated);
        }

        assert_eq!(store.get("1").unwrap().complete, original);
    }

    #[test]
    fn test_delete_then_reload_drops_the_task() {
        let mut store = TaskStore::new();
        store.replace_all(vec![task("1"), task("2"), task("3")]);

        // The backend no longer returns task 2 after a DELETE.
        store.replace_all(vec![task("1"), task("3")]);

        assert!(!store.contains("2"));
        assert_eq!(store.tasks().len(), 2);
    }

    #[test]
    fn test_subtask_toggle_touches_only_the_addressed_pair() {
        let mut first = task("1");
        first.sub_tasks = vec![SubTask::new("a"), SubTask::new("b"), SubTask::new("c")];
        let mut second = task("2");
        second.sub_tasks = vec![SubTask::new("x"), SubTask::new("y")];

        let mut store = TaskStore::new();
        store.replace_all(vec![first, second]);

        let target = store.get("1").unwrap().sub_tasks[2].id.clone();
        let mut updated = store.get("1").unwrap().clone();
        assert!(updated.toggle_subtask(&target));
        store.replace("1", updated);

        let first = store.get("1").unwrap();
        assert!(!first.sub_tasks[0].complete);
        assert!(!first.sub_tasks[1].complete);
        assert!(first.sub_tasks[2].complete);

        let second = store.get("2").unwrap();
        assert!(second.sub_tasks.iter().all(|st| !st.complete));
    }

    #[test]
    fn test_toggle_unknown_subtask_changes_nothing() {
        let mut t = task("1");
        t.sub_tasks = vec![SubTask::new("a")];

        assert!(!t.toggle_subtask("not-an-id"));
        assert!(!t.sub_tasks[0].complete);
    }
}
