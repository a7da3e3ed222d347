use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque task identifier assigned by the backend.
///
/// The list endpoint is free to send ids as JSON strings or integers;
/// both normalize to the string form here, so id equality is always a
/// string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTaskId")]
pub struct TaskId(String);

impl TaskId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTaskId {
    Text(String),
    Number(i64),
}

impl From<RawTaskId> for TaskId {
    fn from(raw: RawTaskId) -> Self {
        match raw {
            RawTaskId::Text(text) => Self(text),
            RawTaskId::Number(number) => Self(number.to_string()),
        }
    }
}

/// Workflow state of a task. Unrecognized wire values fall back to
/// `NotStarted` instead of failing the whole forest fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Done,
}

impl Status {
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::NotStarted, Self::InProgress, Self::Done]
    }

    #[must_use]
    pub fn as_key(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Done => "Done",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "not-started" => Some(Self::NotStarted),
            "in-progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        Self::from_key(&value).unwrap_or_default()
    }
}

impl From<Status> for String {
    fn from(value: Status) -> Self {
        value.as_key().to_string()
    }
}

/// Task priority. Unrecognized wire values fall back to `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    #[must_use]
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Self::from_key(&value).unwrap_or_default()
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_key().to_string()
    }
}

/// Estimated effort. Same wire tolerance as `Priority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Effort {
    Low,
    #[default]
    Medium,
    High,
}

impl Effort {
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    #[must_use]
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl From<String> for Effort {
    fn from(value: String) -> Self {
        Self::from_key(&value).unwrap_or_default()
    }
}

impl From<Effort> for String {
    fn from(value: Effort) -> Self {
        value.as_key().to_string()
    }
}

/// One task as returned by the list endpoint. `children` is whatever
/// nesting the server sent; the client never rebuilds it from
/// `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub assignee: String,

    #[serde(default)]
    pub owner: String,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub effort: Effort,

    #[serde(default)]
    pub parent_id: Option<TaskId>,

    #[serde(default)]
    pub children: Vec<Task>,
}

/// Body sent to the create and update endpoints. Same shape for both;
/// the server assigns `id` and computes `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPayload {
    pub title: String,
    pub detail: String,
    pub assignee: String,
    pub owner: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: Status,
    pub priority: Priority,
    pub effort: Effort,
    pub parent_id: Option<TaskId>,
}

#[cfg(test)]
mod task_tests {
    use super::*;

    #[test]
    fn task_id_accepts_strings_and_numbers() {
        let from_text: TaskId = serde_json::from_str("\"a-7\"").expect("string id");
        let from_number: TaskId = serde_json::from_str("7").expect("numeric id");

        assert_eq!(from_text, TaskId::from("a-7"));
        assert_eq!(from_number, TaskId::from("7"));
        assert_eq!(serde_json::to_string(&from_number).expect("serialize"), "\"7\"");
    }

    #[test]
    fn numeric_and_string_ids_compare_equal_after_normalization() {
        let numeric: TaskId = serde_json::from_str("12").expect("numeric id");
        let text: TaskId = serde_json::from_str("\"12\"").expect("string id");
        assert_eq!(numeric, text);
    }

    #[test]
    fn status_round_trips_in_kebab_case() {
        for status in Status::all() {
            let json = serde_json::to_string(&status).expect("serialize");
            let back: Status = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, status);
        }
        assert_eq!(
            serde_json::to_string(&Status::InProgress).expect("serialize"),
            "\"in-progress\""
        );
    }

    #[test]
    fn unknown_enum_values_fall_back_to_defaults() {
        let status: Status = serde_json::from_str("\"archived\"").expect("status");
        let priority: Priority = serde_json::from_str("\"urgent\"").expect("priority");
        let effort: Effort = serde_json::from_str("\"\"").expect("effort");

        assert_eq!(status, Status::NotStarted);
        assert_eq!(priority, Priority::Medium);
        assert_eq!(effort, Effort::Medium);
    }

    #[test]
    fn task_tolerates_sparse_server_records() {
        let task: Task = serde_json::from_str(r#"{"id": 3, "title": "Write docs"}"#)
            .expect("sparse task");

        assert_eq!(task.id, TaskId::from("3"));
        assert_eq!(task.title, "Write docs");
        assert!(task.detail.is_empty());
        assert_eq!(task.start_date, None);
        assert_eq!(task.status, Status::NotStarted);
        assert!(task.children.is_empty());
        assert_eq!(task.parent_id, None);
    }

    #[test]
    fn payload_serializes_dates_as_plain_calendar_days() {
        let payload = TaskPayload {
            title: "Ship it".to_string(),
            detail: String::new(),
            assignee: String::new(),
            owner: String::new(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 10).expect("date"),
            status: Status::Done,
            priority: Priority::High,
            effort: Effort::Low,
            parent_id: Some(TaskId::from("9")),
        };

        let value = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(value["start_date"], "2024-01-01");
        assert_eq!(value["due_date"], "2024-01-10");
        assert_eq!(value["status"], "done");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["parent_id"], "9");
    }
}
