use serde::{Deserialize, Serialize};

use crate::task::Task;
use crate::task_response::TaskResponse;

/// Envelope returned by every single-task operation: `{"task": <task>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskActionResponse {
    pub task: TaskResponse,
}

impl From<&Task> for TaskActionResponse {
    fn from(task: &Task) -> TaskActionResponse {
        TaskActionResponse {
            task: TaskResponse::from(task),
        }
    }
}
