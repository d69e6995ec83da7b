use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "ok": true,
        "code": 0,
        "data": { "status": "ok" },
    });
    (StatusCode::OK, Json(body))
}
