//! Health check handler

use axum::Json;

/// GET /healthcheck
///
/// Liveness probe. Answers `200` with an empty JSON object without ever
/// touching the upstream service.
pub async fn healthcheck() -> Json<serde_json::Value> {
    Json(serde_json::json!({}))
}
