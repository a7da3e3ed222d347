use tasktree_model::{Status, Task, TaskId};
use yew::{function_component, html, Callback, Html, Properties};

/// What the user asked to do with one task. Carried alongside the task
/// id to a single top-level dispatcher, whatever the nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskIntent {
    Edit,
    AddChild,
    Delete,
}

#[derive(Properties, PartialEq)]
pub struct TaskTreeProps {
    pub tasks: Vec<Task>,
    pub on_intent: Callback<(TaskId, TaskIntent)>,
}

#[function_component(TaskTree)]
pub fn task_tree(props: &TaskTreeProps) -> Html {
    html! {
        <div class="panel task-tree">
            { for props.tasks.iter().map(|task| render_task(task, &props.on_intent)) }
        </div>
    }
}

/// One task card plus, recursively, all of its descendants.
fn render_task(task: &Task, on_intent: &Callback<(TaskId, TaskIntent)>) -> Html {
    let intent_button = |label: &'static str, class: &'static str, intent: TaskIntent| {
        let on_intent = on_intent.clone();
        let id = task.id.clone();
        html! {
            <button
                type="button"
                class={class}
                onclick={move |_| on_intent.emit((id.clone(), intent))}
            >
                { label }
            </button>
        }
    };

    let date_range = format!(
        "{} ~ {}",
        task.start_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "—".to_string()),
        task.due_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "—".to_string()),
    );

    html! {
        <div class="task-card" data-task-id={task.id.to_string()}>
            <div class="task-card-head">
                <div>
                    <strong>{ &task.title }</strong>
                    <span class="task-people">{ format!("{} / {}", task.assignee, task.owner) }</span>
                </div>
                <span class={status_badge_class(task.status)}>{ task.status.label() }</span>
            </div>
            {
                if task.detail.is_empty() {
                    html! {}
                } else {
                    html! { <p class="task-detail">{ &task.detail }</p> }
                }
            }
            <ul class="task-summary">
                <li>{ format!("Priority: {}", task.priority.label()) }</li>
                <li>{ format!("Effort: {}", task.effort.label()) }</li>
                <li>{ date_range }</li>
            </ul>
            <div class="task-actions">
                { intent_button("Edit", "btn", TaskIntent::Edit) }
                { intent_button("Add child", "btn", TaskIntent::AddChild) }
                { intent_button("Delete", "btn danger", TaskIntent::Delete) }
            </div>
            {
                if task.children.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="task-children">
                            { for task.children.iter().map(|child| render_task(child, on_intent)) }
                        </div>
                    }
                }
            }
        </div>
    }
}

/// Done reads as success, in-progress as primary, anything else as the
/// neutral secondary badge.
fn status_badge_class(status: Status) -> &'static str {
    match status {
        Status::Done => "badge success",
        Status::InProgress => "badge primary",
        Status::NotStarted => "badge secondary",
    }
}

#[cfg(test)]
mod task_tree_tests {
    use super::*;

    #[test]
    fn badge_classes_follow_the_status() {
        assert_eq!(status_badge_class(Status::Done), "badge success");
        assert_eq!(status_badge_class(Status::InProgress), "badge primary");
        assert_eq!(status_badge_class(Status::NotStarted), "badge secondary");
    }
}
