use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Domain failures surfaced to the caller, plus the storage error passthrough.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::ActivityNotFound => StatusCode::NOT_FOUND,
            AppError::AlreadySignedUp | AppError::ActivityFull | AppError::NotSignedUp => {
                StatusCode::BAD_REQUEST
            }
            AppError::Db(e) => {
                error!("database error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let detail = match &self {
            AppError::Db(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
