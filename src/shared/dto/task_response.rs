use serde::{Deserialize, Serialize};

use crate::task::Task;

/// The client-facing task shape. Completion state is exposed as the derived
/// `is_complete` flag, not the raw timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub is_complete: bool,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> TaskResponse {
        TaskResponse {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            is_complete: task.is_complete(),
        }
    }
}
