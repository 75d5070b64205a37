use axum::Json;
use serde_json::json;

pub struct HealthController {}

impl HealthController {
    pub async fn get() -> Json<serde_json::Value> {
        Json(json!({ "status": "ok" }))
    }
}
