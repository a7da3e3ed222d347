use crate::task::{Task, TaskId};

/// Pre-order depth-first search of the forest for a task id.
///
/// Returns the first match; when the server sends duplicate ids the
/// earlier pre-order occurrence wins and later ones are unreachable.
#[must_use]
pub fn find_task_by_id<'a>(forest: &'a [Task], id: &TaskId) -> Option<&'a Task> {
    for task in forest {
        if task.id == *id {
            return Some(task);
        }
        if let Some(found) = find_task_by_id(&task.children, id) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tree_tests {
    use super::*;

    fn task(id: &str, title: &str, children: Vec<Task>) -> Task {
        Task {
            id: TaskId::from(id),
            title: title.to_string(),
            detail: String::new(),
            assignee: String::new(),
            owner: String::new(),
            start_date: None,
            due_date: None,
            status: Default::default(),
            priority: Default::default(),
            effort: Default::default(),
            parent_id: None,
            children,
        }
    }

    fn sample_forest() -> Vec<Task> {
        vec![
            task(
                "1",
                "Plan release",
                vec![
                    task("2", "Write changelog", vec![]),
                    task("3", "Tag build", vec![task("4", "Sign artifacts", vec![])]),
                ],
            ),
            task("5", "Clean backlog", vec![]),
        ]
    }

    #[test]
    fn finds_roots_and_nested_descendants() {
        let forest = sample_forest();

        let root = find_task_by_id(&forest, &TaskId::from("5")).expect("root");
        assert_eq!(root.title, "Clean backlog");

        let leaf = find_task_by_id(&forest, &TaskId::from("4")).expect("leaf");
        assert_eq!(leaf.title, "Sign artifacts");
    }

    #[test]
    fn missing_id_returns_none() {
        let forest = sample_forest();
        assert!(find_task_by_id(&forest, &TaskId::from("404")).is_none());
    }

    #[test]
    fn duplicate_ids_resolve_to_the_first_pre_order_match() {
        let forest = vec![
            task("1", "First", vec![task("7", "Nested first", vec![])]),
            task("7", "Root second", vec![]),
        ];

        let found = find_task_by_id(&forest, &TaskId::from("7")).expect("duplicate");
        assert_eq!(found.title, "Nested first");
    }

    #[test]
    fn numeric_wire_ids_are_found_by_their_string_form() {
        let forest: Vec<Task> = serde_json::from_str(
            r#"[{"id": 10, "title": "From the wire", "children": [{"id": "11", "title": "Child"}]}]"#,
        )
        .expect("forest");

        assert!(find_task_by_id(&forest, &TaskId::from("10")).is_some());
        assert!(find_task_by_id(&forest, &TaskId::from("11")).is_some());
    }
}
