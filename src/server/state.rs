use std::sync::Arc;

use crate::features::bills::{BillService, BillStore};
use crate::features::stats::StatsService;

#[derive(Clone)]
pub struct AppState {
    pub bills: Arc<BillService>,
    pub stats: Arc<StatsService>,
    pub store: Arc<dyn BillStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BillStore>, session_year: u16) -> Self {
        Self {
            bills: Arc::new(BillService::new(store.clone(), session_year)),
            stats: Arc::new(StatsService::new(store.clone())),
            store,
        }
    }
}
