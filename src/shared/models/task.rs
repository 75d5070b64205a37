use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The persisted work-item record. `id` is assigned by the data context on
/// creation and never changes; `completed_at` carries the completion state
/// (`None` = incomplete).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }
}
