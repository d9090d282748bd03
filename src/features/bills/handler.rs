use axum::Json;
use axum::extract::{Query, State};
use tracing::error;

use crate::core::error::AppError;
use crate::features::bills::dto::BillDto;
use crate::features::bills::filter::BillFilter;
use crate::features::bills::helpers::parse_bill_query;
use crate::server::AppState;

pub async fn handle_list_bills(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<BillDto>>, AppError> {
    let filter = BillFilter::from_params(&parse_bill_query(pairs));

    state.bills.list_bills(&filter).await.map(Json).map_err(|err| {
        error!(target: "bills", error = %err, "failed to fetch bills");
        AppError::service("Failed to fetch bills")
    })
}

pub async fn handle_list_states(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    state.bills.list_states().await.map(Json).map_err(|err| {
        error!(target: "bills", error = %err, "failed to fetch states");
        AppError::service("Failed to fetch states")
    })
}
