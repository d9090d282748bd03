use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("{0}")]
    Service(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn configuration(message: String) -> Self {
        Self::Configuration(message)
    }

    pub fn service(message: &str) -> Self {
        Self::Service(message.to_string())
    }

    pub fn internal(message: String) -> Self {
        Self::Internal(message)
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            // Driver messages can carry hostnames and SQL; keep them in the logs.
            Self::Storage(_) => "storage unavailable".to_string(),
            other => other.to_string(),
        };

        let body = Json(ErrorResponse { error: message });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
