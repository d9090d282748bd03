use axum::Router;
use axum::routing::get;

use crate::features::bills::{handle_list_bills, handle_list_states};
use crate::features::dashboard::handle_index;
use crate::features::definitions::handle_definitions;
use crate::features::health::handle_healthcheck;
use crate::features::stats::handle_stats;
use crate::server::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/api/bills", get(handle_list_bills))
        .route("/api/stats", get(handle_stats))
        .route("/api/states", get(handle_list_states))
        .route("/api/definitions", get(handle_definitions))
        .route("/health", get(handle_healthcheck))
        .with_state(state)
}
