use gloo::net::http::{Request, Response};
use serde::Deserialize;
use tasktree_model::{Task, TaskId, TaskPayload};

/// Generic messages for failures the server did not explain.
pub const FETCH_FAILED: &str = "Could not fetch tasks.";
pub const SAVE_FAILED: &str = "Could not save the task.";
pub const DELETE_FAILED: &str = "Could not delete the task.";

#[derive(Deserialize)]
struct TaskListBody {
    #[serde(default)]
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn tasks_url(base: &str) -> String {
    format!("{}/tasks", base.trim_end_matches('/'))
}

fn task_url(base: &str, id: &TaskId) -> String {
    format!("{}/{}", tasks_url(base), id)
}

/// GET the full forest. Every failure collapses to the one fetch
/// message; the caller clears the store and shows it globally.
pub async fn list_tasks(base: &str) -> Result<Vec<Task>, String> {
    let response = Request::get(&tasks_url(base)).send().await.map_err(|error| {
        tracing::error!(%error, "task list request failed to send");
        FETCH_FAILED.to_string()
    })?;

    if !response.ok() {
        tracing::error!(status = response.status(), "task list request was rejected");
        return Err(FETCH_FAILED.to_string());
    }

    let body: TaskListBody = response.json().await.map_err(|error| {
        tracing::error!(%error, "task list body did not decode");
        FETCH_FAILED.to_string()
    })?;

    tracing::debug!(roots = body.tasks.len(), "fetched task forest");
    Ok(body.tasks)
}

pub async fn create_task(base: &str, payload: &TaskPayload) -> Result<(), String> {
    let request = Request::post(&tasks_url(base)).json(payload).map_err(|error| {
        tracing::error!(%error, "create payload did not encode");
        SAVE_FAILED.to_string()
    })?;

    let response = request.send().await.map_err(|error| {
        tracing::error!(%error, "create request failed to send");
        SAVE_FAILED.to_string()
    })?;

    if response.ok() {
        return Ok(());
    }
    Err(rejection_message(response, SAVE_FAILED).await)
}

pub async fn update_task(base: &str, id: &TaskId, payload: &TaskPayload) -> Result<(), String> {
    let request = Request::put(&task_url(base, id)).json(payload).map_err(|error| {
        tracing::error!(%error, %id, "update payload did not encode");
        SAVE_FAILED.to_string()
    })?;

    let response = request.send().await.map_err(|error| {
        tracing::error!(%error, %id, "update request failed to send");
        SAVE_FAILED.to_string()
    })?;

    if response.ok() {
        return Ok(());
    }
    Err(rejection_message(response, SAVE_FAILED).await)
}

pub async fn delete_task(base: &str, id: &TaskId) -> Result<(), String> {
    let response = Request::delete(&task_url(base, id)).send().await.map_err(|error| {
        tracing::error!(%error, %id, "delete request failed to send");
        DELETE_FAILED.to_string()
    })?;

    if response.ok() {
        return Ok(());
    }
    Err(rejection_message(response, DELETE_FAILED).await)
}

/// User-facing message for a rejected request: the server's JSON
/// `message` when one parses, else the fixed fallback.
async fn rejection_message(response: Response, fallback: &str) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = message_from_error_body(&body, fallback);
    tracing::error!(status, message = %message, "request was rejected");
    message
}

fn message_from_error_body(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
        }) if !message.trim().is_empty() => message,
        _ => fallback.to_string(),
    }
}
