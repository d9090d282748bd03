mod common;

use std::sync::Arc;

use mh_ai_bill_tracker::features::bills::{
    BillFilter, BillService, BillStore, TagFlags, parse_bill_query,
};
use mh_ai_bill_tracker::features::definitions::{TAG_DEFINITIONS, TaxonomyCode};

use common::{InMemoryBillStore, query_pairs, sample_bills, sample_store};

fn service(store: Arc<InMemoryBillStore>) -> BillService {
    let store: Arc<dyn BillStore> = store;
    BillService::new(store, 2025)
}

fn filter(query: &str) -> BillFilter {
    BillFilter::from_params(&parse_bill_query(query_pairs(query)))
}

#[tokio::test]
async fn default_listing_hides_not_relevant_bills() {
    let service = service(sample_store());

    let bills = service
        .list_bills(&BillFilter::default())
        .await
        .expect("bills");

    assert_eq!(bills.len(), 8);
    assert!(bills.iter().all(|bill| bill.taxonomy_code != TaxonomyCode::NR));

    let everything = service
        .list_bills(&filter("hide_nr=false"))
        .await
        .expect("bills");
    assert_eq!(everything.len(), sample_bills().len());
    assert_eq!(
        everything
            .iter()
            .filter(|bill| bill.taxonomy_code == TaxonomyCode::NR)
            .count(),
        2
    );
}

#[tokio::test]
async fn results_are_ordered_by_state_then_bill() {
    let bills = service(sample_store())
        .list_bills(&filter("hide_nr=false"))
        .await
        .expect("bills");

    let keys: Vec<(String, String)> = bills
        .iter()
        .map(|bill| (bill.state.clone(), bill.bill.clone()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(keys[0], ("CA".to_string(), "AB1018".to_string()));
}

#[tokio::test]
async fn california_disclosure_example() {
    let bills = service(sample_store())
        .list_bills(&filter("state=CA&hide_nr=true&tags%5B%5D=disclosure_consent"))
        .await
        .expect("bills");

    let ids: Vec<&str> = bills.iter().map(|bill| bill.bill.as_str()).collect();
    assert_eq!(ids, vec!["AB489", "SB243"]);
    for bill in &bills {
        assert_eq!(bill.state, "CA");
        assert_ne!(bill.taxonomy_code, TaxonomyCode::NR);
        assert!(bill.tags.is_set("disclosure_consent"));
    }
}

#[tokio::test]
async fn every_result_satisfies_every_requested_predicate() {
    let service = service(sample_store());
    let queries = [
        "taxonomy_code=E&tags[]=disclosure_consent&tags[]=opt_out",
        "state=NY&taxonomy_code=CB",
        "search=hb&hide_nr=false",
        "state=IL&tags[]=civil_penalties&tags[]=human_in_the_loop",
        "taxonomy_code=all&state=all&tags[]=safety_standards",
    ];

    for query in queries {
        let filter = filter(query);
        let bills = service.list_bills(&filter).await.expect("bills");
        assert!(!bills.is_empty(), "{query} should match something");

        for bill in &bills {
            if let Some(state) = &filter.state {
                assert_eq!(&bill.state, state, "{query}");
            }
            if let Some(code) = filter.taxonomy_code {
                assert_eq!(bill.taxonomy_code, code, "{query}");
            }
            if filter.hide_not_relevant {
                assert_ne!(bill.taxonomy_code, TaxonomyCode::NR, "{query}");
            }
            for tag in &filter.tags {
                assert!(bill.tags.is_set(tag.key), "{query} requires {}", tag.key);
            }
        }
    }
}

#[tokio::test]
async fn tag_count_and_active_tags_follow_the_flags() {
    let bills = service(sample_store())
        .list_bills(&filter("hide_nr=false"))
        .await
        .expect("bills");

    for bill in &bills {
        let expected: Vec<&str> = TAG_DEFINITIONS
            .iter()
            .filter(|tag| bill.tags.is_set(tag.key))
            .map(|tag| tag.name)
            .collect();
        assert_eq!(bill.active_tags, expected);
        assert_eq!(bill.tag_count, expected.len());
        assert_eq!(
            bill.link,
            format!("https://legiscan.com/{}/bill/{}/2025", bill.state, bill.bill)
        );
    }

    let illinois = bills.iter().find(|bill| bill.bill == "HB1806").expect("HB1806");
    assert_eq!(
        illinois.active_tags,
        vec!["Civil Penalties", "Disclosure/Consent", "Human-in-the-Loop"]
    );
}

#[tokio::test]
async fn unrecognised_tags_do_not_change_results() {
    let service = service(sample_store());

    let baseline = service.list_bills(&filter("state=CA")).await.expect("bills");
    let with_unknown = service
        .list_bills(&filter("state=CA&tags[]=not_a_tag&tags[]=1%3D1"))
        .await
        .expect("bills");

    let ids = |bills: &[mh_ai_bill_tracker::features::bills::BillDto]| {
        bills.iter().map(|bill| bill.bill.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&baseline), ids(&with_unknown));
}

#[tokio::test]
async fn search_matches_bill_or_state_case_insensitively() {
    let service = service(sample_store());

    let by_bill = service.list_bills(&filter("search=hb1")).await.expect("bills");
    let ids: Vec<&str> = by_bill.iter().map(|bill| bill.bill.as_str()).collect();
    assert_eq!(ids, vec!["HB1806", "HB1234"]);

    let by_state = service.list_bills(&filter("search=ut")).await.expect("bills");
    assert_eq!(by_state.len(), 1);
    assert_eq!(by_state[0].state, "UT");

    let none = service.list_bills(&filter("search=health")).await.expect("bills");
    assert!(none.is_empty());
}

#[tokio::test]
async fn states_are_distinct_and_sorted() {
    let states = service(sample_store()).list_states().await.expect("states");
    assert_eq!(states, vec!["CA", "IL", "NY", "TX", "UT"]);
}

#[tokio::test]
async fn storage_failures_return_no_partial_results() {
    let store = Arc::new(InMemoryBillStore::failing());
    let result = service(store.clone()).list_bills(&BillFilter::default()).await;

    assert!(result.is_err());
    assert_eq!(store.call_count(), 1);
}

#[test]
fn tag_flags_ignore_unknown_keys() {
    let flags = TagFlags::from_keys(["opt_out", "nonsense", "opt_out"]);
    assert_eq!(flags.count(), 1);
    assert!(flags.is_set("opt_out"));
    assert!(!flags.is_set("nonsense"));
}
