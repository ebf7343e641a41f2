use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. The service is stateless with no backing dependencies,
/// so a fixed acknowledgment is all there is to report.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}
