use chrono::NaiveDate;
use tasktree_model::form::{FormMode, FormState};
use tasktree_model::task::{Status, Task, TaskId};
use tasktree_model::tree::find_task_by_id;

fn day(text: &str) -> NaiveDate {
    text.parse().expect("date literal")
}

fn server_forest() -> Vec<Task> {
    // Shape of a GET /api/tasks response body, ids mixed between numbers
    // and strings the way a loosely typed backend sends them.
    serde_json::from_str(
        r#"[
            {
                "id": 1,
                "title": "Release 2.4",
                "detail": "Everything needed to cut the release.",
                "assignee": "mika",
                "owner": "sol",
                "start_date": "2024-01-01",
                "due_date": "2024-01-10",
                "status": "in-progress",
                "priority": "high",
                "effort": "high",
                "children": [
                    {
                        "id": "1-1",
                        "title": "Write changelog",
                        "parent_id": 1,
                        "status": "done",
                        "start_date": "2024-01-02",
                        "due_date": "2024-01-03"
                    },
                    {
                        "id": "1-2",
                        "title": "Smoke-test installers",
                        "parent_id": 1,
                        "status": "mystery-state"
                    }
                ]
            },
            {
                "id": 2,
                "title": "Backlog grooming"
            }
        ]"#,
    )
    .expect("forest fixture")
}

#[test]
fn whole_forest_round_trip_and_form_session() {
    let forest = server_forest();
    let today = day("2024-03-15");

    // Lookup crosses root/child boundaries and normalizes numeric ids.
    let release = find_task_by_id(&forest, &TaskId::from("1")).expect("release root");
    assert_eq!(release.children.len(), 2);
    let smoke = find_task_by_id(&forest, &TaskId::from("1-2")).expect("nested child");
    assert_eq!(smoke.status, Status::NotStarted, "unknown status coerces to default");

    // Add-child flow: dates inherited from the parent, not today.
    let mut child_form = FormState::create_under(release, today);
    assert_eq!(child_form.parent_label(), Some("Release 2.4".to_string()));
    assert_eq!(child_form.form.start_date, day("2024-01-01"));
    assert_eq!(child_form.form.due_date, day("2024-01-10"));

    child_form.form.title = " Verify signatures ".to_string();
    let payload = child_form.payload().expect("valid payload");
    assert_eq!(payload.title, "Verify signatures");
    assert_eq!(payload.parent_id, Some(TaskId::from("1")));

    // Edit flow: fields load from the task, parent title re-resolves.
    let changelog = find_task_by_id(&forest, &TaskId::from("1-1")).expect("changelog");
    let mut edit_form = FormState::edit(changelog, &forest, today);
    assert_eq!(edit_form.mode, FormMode::Edit(TaskId::from("1-1")));
    assert_eq!(edit_form.parent_title, "Release 2.4");
    assert_eq!(edit_form.form.status, Status::Done);

    // Detaching the parent while editing keeps the task's own dates.
    edit_form.clear_parent(today);
    assert_eq!(edit_form.parent_id, None);
    assert_eq!(edit_form.form.start_date, day("2024-01-02"));

    // A refreshed forest that dropped the parent clears the stale title.
    let mut reopened = FormState::edit(changelog, &forest, today);
    reopened.refresh_parent_title(&[]);
    assert!(reopened.parent_title.is_empty());
    assert_eq!(reopened.parent_label(), Some("1".to_string()));
}
