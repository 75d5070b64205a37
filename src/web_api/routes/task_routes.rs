use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::{app_state::SharedState, task_controller::TaskController};

pub const ROUTER_PATH: &str = "/tasks";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(
            ROUTER_PATH,
            post(TaskController::create).get(TaskController::list),
        )
        .route(
            format!("{}/:id", ROUTER_PATH).as_str(),
            get(TaskController::get)
                .put(TaskController::update)
                .delete(TaskController::delete),
        )
        .route(
            format!("{}/:id/mark_complete", ROUTER_PATH).as_str(),
            patch(TaskController::mark_complete),
        )
        .route(
            format!("{}/:id/mark_incomplete", ROUTER_PATH).as_str(),
            patch(TaskController::mark_incomplete),
        )
        .with_state(app_state)
}
