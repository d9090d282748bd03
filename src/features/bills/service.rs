use std::sync::Arc;

use tracing::debug;

use crate::core::error::AppError;
use crate::features::bills::dto::BillDto;
use crate::features::bills::filter::BillFilter;
use crate::features::bills::helpers::to_bill_dto;
use crate::features::bills::store::BillStore;

pub struct BillService {
    store: Arc<dyn BillStore>,
    session_year: u16,
}

impl BillService {
    pub fn new(store: Arc<dyn BillStore>, session_year: u16) -> Self {
        Self {
            store,
            session_year,
        }
    }

    pub async fn list_bills(&self, filter: &BillFilter) -> Result<Vec<BillDto>, AppError> {
        let records = self.store.fetch_bills(filter).await?;
        debug!(
            target: "bills",
            predicates = filter.predicates().len(),
            rows = records.len(),
            "fetched bills"
        );

        Ok(records
            .into_iter()
            .map(|record| to_bill_dto(record, self.session_year))
            .collect())
    }

    pub async fn list_states(&self) -> Result<Vec<String>, AppError> {
        self.store.list_states().await
    }
}
