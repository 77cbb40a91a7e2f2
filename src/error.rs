use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::db::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Player Not Found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => {
                let body = Json(ErrorResponse {
                    message: "Player Not Found".to_string(),
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            // Storage faults are undifferentiated server errors with no
            // structured body.
            ApiError::Store(err) => {
                tracing::error!("player store fault: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
