#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::extract::Query;
use axum::http::Uri;

use mh_ai_bill_tracker::core::error::AppError;
use mh_ai_bill_tracker::features::bills::{
    BillFilter, BillRecord, BillStore, Predicate, TagFlags,
};
use mh_ai_bill_tracker::features::definitions::{TAG_DEFINITIONS, TaxonomyCode};
use mh_ai_bill_tracker::features::stats::{StateCount, TagCount, TaxonomyCount};

/// In-memory stand-in for the Postgres store, evaluating the same predicate
/// list the SQL is rendered from. `pg_store_tests.rs` covers the real store.
pub struct InMemoryBillStore {
    bills: Vec<BillRecord>,
    failing: bool,
    calls: AtomicUsize,
}

impl InMemoryBillStore {
    pub fn new(bills: Vec<BillRecord>) -> Self {
        Self {
            bills,
            failing: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            bills: Vec::new(),
            failing: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(())
    }
}

#[async_trait]
impl BillStore for InMemoryBillStore {
    async fn fetch_bills(&self, filter: &BillFilter) -> Result<Vec<BillRecord>, AppError> {
        self.check()?;
        let mut bills: Vec<BillRecord> = self
            .bills
            .iter()
            .filter(|bill| matches(filter, bill))
            .cloned()
            .collect();
        bills.sort_by(|a, b| (&a.state, &a.bill).cmp(&(&b.state, &b.bill)));
        Ok(bills)
    }

    async fn list_states(&self) -> Result<Vec<String>, AppError> {
        self.check()?;
        let mut states: Vec<String> = self.bills.iter().map(|bill| bill.state.clone()).collect();
        states.sort();
        states.dedup();
        Ok(states)
    }

    async fn count_bills(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.bills.len() as i64)
    }

    async fn taxonomy_counts(&self) -> Result<Vec<TaxonomyCount>, AppError> {
        self.check()?;
        let mut counts: BTreeMap<String, i64> = BTreeMap::new();
        for bill in &self.bills {
            *counts.entry(bill.taxonomy_code.to_string()).or_insert(0) += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(taxonomy_code, count)| TaxonomyCount {
                taxonomy_code,
                count,
            })
            .collect())
    }

    async fn top_states(&self, limit: i64) -> Result<Vec<StateCount>, AppError> {
        self.check()?;
        let mut counts: BTreeMap<String, i64> = BTreeMap::new();
        for bill in &self.bills {
            *counts.entry(bill.state.clone()).or_insert(0) += 1;
        }
        let mut states: Vec<StateCount> = counts
            .into_iter()
            .map(|(state, count)| StateCount { state, count })
            .collect();
        states.sort_by(|a, b| b.count.cmp(&a.count));
        states.truncate(limit as usize);
        Ok(states)
    }

    async fn tag_counts(&self) -> Result<Vec<TagCount>, AppError> {
        self.check()?;
        Ok(TAG_DEFINITIONS
            .iter()
            .map(|tag| TagCount {
                tag,
                count: self.bills.iter().filter(|bill| bill.tags.is_set(tag.key)).count() as i64,
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

/// Decodes `query` the way the `/api/bills` handler's extractor does.
pub fn query_pairs(query: &str) -> Vec<(String, String)> {
    let uri: Uri = format!("/api/bills?{query}").parse().expect("valid uri");
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&uri).expect("query");
    pairs
}

pub fn matches(filter: &BillFilter, bill: &BillRecord) -> bool {
    filter.predicates().iter().all(|predicate| match predicate {
        Predicate::State(state) => bill.state == *state,
        Predicate::Taxonomy(code) => bill.taxonomy_code == *code,
        Predicate::ExcludeTaxonomy(code) => bill.taxonomy_code != *code,
        Predicate::Search(term) => {
            let needle = term.to_lowercase();
            bill.bill.to_lowercase().contains(&needle)
                || bill.state.to_lowercase().contains(&needle)
        }
        Predicate::Tag(tag) => bill.tags.is_set(tag.key),
    })
}

pub fn bill(state: &str, id: &str, code: TaxonomyCode, tags: &[&str]) -> BillRecord {
    BillRecord {
        state: state.to_string(),
        bill: id.to_string(),
        status: None,
        taxonomy_code: code,
        tags: TagFlags::from_keys(tags.iter().copied()),
        extra: serde_json::Map::new(),
    }
}

pub fn sample_bills() -> Vec<BillRecord> {
    vec![
        bill("CA", "SB243", TaxonomyCode::E, &["disclosure_consent", "vulnerable_populations"]),
        bill("CA", "AB489", TaxonomyCode::E, &["disclosure_consent", "licensing_board_oversight"]),
        bill("CA", "AB1018", TaxonomyCode::II, &["risk_classification", "discrimination_bias"]),
        bill("CA", "SB7", TaxonomyCode::NR, &["disclosure_consent"]),
        bill("IL", "HB1806", TaxonomyCode::E, &["civil_penalties", "human_in_the_loop", "disclosure_consent"]),
        bill("NY", "S8484", TaxonomyCode::SR, &["safety_standards"]),
        bill("NY", "A6767", TaxonomyCode::CB, &["safety_standards"]),
        bill("TX", "HB1234", TaxonomyCode::SR, &[]),
        bill("TX", "HB149", TaxonomyCode::NR, &[]),
        bill("UT", "HB452", TaxonomyCode::E, &["disclosure_consent", "data_protection", "opt_out"]),
    ]
}

pub fn sample_store() -> Arc<InMemoryBillStore> {
    Arc::new(InMemoryBillStore::new(sample_bills()))
}
