use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::{
    app_state::SharedState, create_task_request::CreateTaskRequest,
    delete_task_response::DeleteTaskResponse, sort_directive::SortDirective,
    task::Task, task_action_response::TaskActionResponse, task_response::TaskResponse,
    update_task_request::UpdateTaskRequest,
};

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    pub sort: Option<String>,
    pub title: Option<String>,
}

// Resolve an id to a stored task or fail the request with 404.
fn find_task(state: &SharedState, id: u64) -> Result<Task, (StatusCode, String)> {
    state
        .data_context
        .get_task(id)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Task not found".to_string()))
}

pub struct TaskController {}

impl TaskController {
    // POST /tasks
    pub async fn create(
        State(state): State<SharedState>,
        Json(body): Json<CreateTaskRequest>,
    ) -> Result<(StatusCode, Json<TaskActionResponse>), (StatusCode, String)> {
        let task = state
            .data_context
            .create_task(body.title, body.description)
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

        Ok((StatusCode::CREATED, Json(TaskActionResponse::from(&task))))
    }

    // GET /tasks
    pub async fn list(
        State(state): State<SharedState>,
        Query(query): Query<ListTasksQuery>,
    ) -> Result<Json<Vec<TaskResponse>>, (StatusCode, String)> {
        let sort = query.sort.as_deref().and_then(SortDirective::parse);
        let tasks = state
            .data_context
            .list_tasks(query.title.as_deref(), sort)
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

        Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
    }

    // GET /tasks/:id
    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<Json<TaskActionResponse>, (StatusCode, String)> {
        let task = find_task(&state, id)?;
        Ok(Json(TaskActionResponse::from(&task)))
    }

    // PUT /tasks/:id — partial update of title/description only
    pub async fn update(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
        Json(body): Json<UpdateTaskRequest>,
    ) -> Result<Json<TaskActionResponse>, (StatusCode, String)> {
        let mut task = find_task(&state, id)?;

        if let Some(title) = body.title {
            task.title = title;
        }
        if let Some(description) = body.description {
            task.description = Some(description);
        }

        state
            .data_context
            .update_task(&task)
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

        Ok(Json(TaskActionResponse::from(&task)))
    }

    // PATCH /tasks/:id/mark_complete
    //
    // Commit first, notify second. A failed notification surfaces the
    // collaborator's message but leaves the completion in place and the
    // status at 200, matching the upstream contract.
    pub async fn mark_complete(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
        let mut task = find_task(&state, id)?;
        task.completed_at = Some(Utc::now());

        state
            .data_context
            .update_task(&task)
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

        let outcome = state.notifier.notify_completed(&task).await;
        if outcome.ok {
            Ok(Json(json!(TaskActionResponse::from(&task))))
        } else {
            warn!(task_id = task.id, "completion notification failed: {}", outcome.text);
            Ok(Json(json!({ "Error message": outcome.text })))
        }
    }

    // PATCH /tasks/:id/mark_incomplete
    pub async fn mark_incomplete(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<Json<TaskActionResponse>, (StatusCode, String)> {
        let mut task = find_task(&state, id)?;
        task.completed_at = None;

        state
            .data_context
            .update_task(&task)
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

        Ok(Json(TaskActionResponse::from(&task)))
    }

    // DELETE /tasks/:id
    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<Json<DeleteTaskResponse>, (StatusCode, String)> {
        let task = find_task(&state, id)?;

        state
            .data_context
            .delete_task(id)
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

        Ok(Json(DeleteTaskResponse {
            details: format!("Task {} \"{}\" successfully deleted", task.id, task.title),
        }))
    }
}
