use crate::features::bills::dto::{BillDto, BillQueryParams, BillRecord};

const LEGISCAN_BASE: &str = "https://legiscan.com";

/// Folds decoded `/api/bills` query pairs into parameters. `tags[]` may
/// repeat; the bare `tags` spelling is accepted too. Later scalar values win.
pub fn parse_bill_query(pairs: Vec<(String, String)>) -> BillQueryParams {
    let mut params = BillQueryParams::default();

    for (key, value) in pairs {
        match key.as_str() {
            "state" => params.state = Some(value),
            "taxonomy_code" => params.taxonomy_code = Some(value),
            "search" => params.search = Some(value),
            "hide_nr" => params.hide_nr = Some(value),
            "tags[]" | "tags" => params.tags.push(value),
            _ => {}
        }
    }

    params
}

pub fn build_bill_link(state: &str, bill: &str, session_year: u16) -> String {
    format!(
        "{LEGISCAN_BASE}/{}/bill/{}/{session_year}",
        urlencoding::encode(state),
        urlencoding::encode(bill)
    )
}

pub(super) fn to_bill_dto(record: BillRecord, session_year: u16) -> BillDto {
    let link = build_bill_link(&record.state, &record.bill, session_year);
    let active_tags = record.tags.active().map(|tag| tag.name).collect();

    BillDto {
        tag_count: record.tags.count(),
        link,
        active_tags,
        state: record.state,
        bill: record.bill,
        status: record.status,
        taxonomy_code: record.taxonomy_code,
        tags: record.tags,
        extra: record.extra,
    }
}
