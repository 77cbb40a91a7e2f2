use axum::{http::StatusCode, response::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
}

/// GET /health - constant liveness response, no persistence access.
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "OK".to_string(),
    };

    (StatusCode::OK, Json(response))
}
