use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use mh_ai_bill_tracker::config::load_config;
use mh_ai_bill_tracker::core::database::build_pool;
use mh_ai_bill_tracker::core::error::AppError;
use mh_ai_bill_tracker::features::bills::{BillStore, PgBillStore};
use mh_ai_bill_tracker::server::{AppState, build_router};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "bill tracker exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = load_config()?;

    let pool = build_pool(&config.database_url, &config.database)
        .map_err(|err| AppError::configuration(format!("invalid DATABASE_URL: {err}")))?;
    let store: Arc<dyn BillStore> = Arc::new(PgBillStore::new(pool));
    let app = build_router(AppState::new(store, config.session_year));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
