use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::bills::BillStore;
use crate::features::stats::dto::{StatsDto, TagStatDto};

pub const STATE_SUMMARY_LIMIT: usize = 10;

pub struct StatsService {
    store: Arc<dyn BillStore>,
}

impl StatsService {
    pub fn new(store: Arc<dyn BillStore>) -> Self {
        Self { store }
    }

    /// All aggregates or nothing: the first failing query fails the summary.
    pub async fn summary(&self) -> Result<StatsDto, AppError> {
        let (total_bills, taxonomy_summary, state_summary, tag_counts) = tokio::try_join!(
            self.store.count_bills(),
            self.store.taxonomy_counts(),
            self.store.top_states(STATE_SUMMARY_LIMIT as i64),
            self.store.tag_counts(),
        )?;

        let mut tag_stats: Vec<TagStatDto> = tag_counts
            .into_iter()
            .map(|entry| TagStatDto {
                name: entry.tag.name,
                count: entry.count,
            })
            .collect();
        // Stable, so equal counts keep definition order.
        tag_stats.sort_by(|a, b| b.count.cmp(&a.count));

        Ok(StatsDto {
            total_bills,
            taxonomy_summary,
            state_summary,
            tag_stats,
        })
    }
}
