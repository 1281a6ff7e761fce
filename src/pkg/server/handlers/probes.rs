use axum::Json;
use serde_json::{Value, json};

/// Liveness only, the store is never touched.
pub async fn healthz() -> Json<Value> {
    tracing::debug!("service is healthy");
    Json(json!({"status": "ok"}))
}
