use async_trait::async_trait;

use crate::task::Task;

/// Outcome of an outbound completion announcement. `ok` mirrors whether the
/// collaborator reported success; `text` carries its response body (or the
/// transport error) and is surfaced to the client on failure.
#[derive(Debug, Clone)]
pub struct NotifyOutcome {
    pub ok: bool,
    pub text: String,
}

/// Collaborator called after a task transitions to complete. The call happens
/// after the local commit; a failed notification does not roll the completion
/// back.
#[async_trait]
pub trait CompletionNotifier: Send + Sync {
    async fn notify_completed(&self, task: &Task) -> NotifyOutcome;
}
