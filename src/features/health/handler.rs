use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::warn;

use crate::server::AppState;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum HealthResponse {
    Healthy {
        status: &'static str,
        database: &'static str,
    },
    Unhealthy {
        status: &'static str,
        error: String,
    },
}

/// Liveness check: one round-trip to the database.
pub async fn handle_healthcheck(State(state): State<AppState>) -> Response {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse::Healthy {
                status: "healthy",
                database: "connected",
            }),
        )
            .into_response(),
        Err(err) => {
            warn!(target: "health", error = %err, "database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::Unhealthy {
                    status: "unhealthy",
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
