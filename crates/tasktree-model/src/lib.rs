pub mod form;
pub mod task;
pub mod tree;

pub use form::{FormMode, FormState, TaskForm};
pub use task::{Effort, Priority, Status, Task, TaskId, TaskPayload};
pub use tree::find_task_by_id;
