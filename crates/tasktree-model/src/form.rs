use chrono::NaiveDate;

use crate::task::{Effort, Priority, Status, Task, TaskId, TaskPayload};
use crate::tree::find_task_by_id;

/// Editable field values behind the shared create/edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub detail: String,
    pub assignee: String,
    pub owner: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: Status,
    pub priority: Priority,
    pub effort: Effort,
}

impl TaskForm {
    #[must_use]
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            detail: String::new(),
            assignee: String::new(),
            owner: String::new(),
            start_date: today,
            due_date: today,
            status: Status::default(),
            priority: Priority::default(),
            effort: Effort::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(TaskId),
}

/// Full state of the dialog while it is open. Dismissal drops the whole
/// value; every open builds a fresh one, so nothing leaks between opens.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub form: TaskForm,
    pub parent_id: Option<TaskId>,
    pub parent_title: String,
    pub error: Option<String>,
}

impl FormState {
    /// Create-mode form with every field at its default.
    #[must_use]
    pub fn create(today: NaiveDate) -> Self {
        Self {
            mode: FormMode::Create,
            form: TaskForm::with_defaults(today),
            parent_id: None,
            parent_title: String::new(),
            error: None,
        }
    }

    /// Create-mode form pre-bound to a parent task. Dates the parent has
    /// seed the new form; dates it lacks stay at today's default.
    #[must_use]
    pub fn create_under(parent: &Task, today: NaiveDate) -> Self {
        let mut state = Self::create(today);
        state.parent_id = Some(parent.id.clone());
        state.parent_title = parent.title.clone();
        if let Some(start) = parent.start_date {
            state.form.start_date = start;
        }
        if let Some(due) = parent.due_date {
            state.form.due_date = due;
        }
        state
    }

    /// Edit-mode form loaded from an existing task. Absent dates fall
    /// back to today; the parent title is resolved against the forest.
    #[must_use]
    pub fn edit(task: &Task, forest: &[Task], today: NaiveDate) -> Self {
        let mut state = Self {
            mode: FormMode::Edit(task.id.clone()),
            form: TaskForm {
                title: task.title.clone(),
                detail: task.detail.clone(),
                assignee: task.assignee.clone(),
                owner: task.owner.clone(),
                start_date: task.start_date.unwrap_or(today),
                due_date: task.due_date.unwrap_or(today),
                status: task.status,
                priority: task.priority,
                effort: task.effort,
            },
            parent_id: task.parent_id.clone(),
            parent_title: String::new(),
            error: None,
        };
        state.refresh_parent_title(forest);
        state
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Detach the parent selection. A create form also snaps both dates
    /// back to today, since they were only inherited through the parent
    /// link; an edit form keeps its dates.
    pub fn clear_parent(&mut self, today: NaiveDate) {
        self.parent_id = None;
        self.parent_title = String::new();
        if !self.is_editing() {
            self.form.start_date = today;
            self.form.due_date = today;
        }
    }

    /// Re-resolve the parent's display title after a forest refresh.
    /// A parent no longer present leaves the title empty.
    pub fn refresh_parent_title(&mut self, forest: &[Task]) {
        self.parent_title = match &self.parent_id {
            Some(id) => find_task_by_id(forest, id)
                .map(|parent| parent.title.clone())
                .unwrap_or_default(),
            None => String::new(),
        };
    }

    /// Label for the parent row: the resolved title, else the raw id.
    #[must_use]
    pub fn parent_label(&self) -> Option<String> {
        self.parent_id.as_ref().map(|id| {
            if self.parent_title.is_empty() {
                id.to_string()
            } else {
                self.parent_title.clone()
            }
        })
    }

    /// Submission body, or `None` when the trimmed title is empty; in
    /// that case nothing must reach the network.
    #[must_use]
    pub fn payload(&self) -> Option<TaskPayload> {
        let title = self.form.title.trim();
        if title.is_empty() {
            return None;
        }
        Some(TaskPayload {
            title: title.to_string(),
            detail: self.form.detail.clone(),
            assignee: self.form.assignee.clone(),
            owner: self.form.owner.clone(),
            start_date: self.form.start_date,
            due_date: self.form.due_date,
            status: self.form.status,
            priority: self.form.priority,
            effort: self.form.effort,
            parent_id: self.parent_id.clone(),
        })
    }
}
