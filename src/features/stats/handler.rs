use axum::Json;
use axum::extract::State;
use tracing::error;

use crate::core::error::AppError;
use crate::features::stats::dto::StatsDto;
use crate::server::AppState;

pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<StatsDto>, AppError> {
    state.stats.summary().await.map(Json).map_err(|err| {
        error!(target: "stats", error = %err, "failed to fetch statistics");
        AppError::service("Failed to fetch statistics")
    })
}
