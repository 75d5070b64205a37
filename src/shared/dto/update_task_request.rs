use serde::Deserialize;

/// Partial update: absent fields leave the stored value unchanged.
/// `id` and `completed_at` are not updatable through this request.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}
