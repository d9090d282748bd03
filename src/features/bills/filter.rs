use sqlx::{Postgres, QueryBuilder};

use crate::features::bills::dto::BillQueryParams;
use crate::features::definitions::{TagDefinition, TaxonomyCode, find_tag};

pub const BILL_TABLE: &str = "bill_data";

/// Filter value that means "do not filter on this field".
pub const ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillFilter {
    pub state: Option<String>,
    pub taxonomy_code: Option<TaxonomyCode>,
    pub search: Option<String>,
    pub hide_not_relevant: bool,
    pub tags: Vec<&'static TagDefinition>,
}

impl Default for BillFilter {
    fn default() -> Self {
        Self {
            state: None,
            taxonomy_code: None,
            search: None,
            hide_not_relevant: true,
            tags: Vec::new(),
        }
    }
}

/// A single conjunct of the bill query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    State(String),
    Taxonomy(TaxonomyCode),
    ExcludeTaxonomy(TaxonomyCode),
    Search(String),
    Tag(&'static TagDefinition),
}

impl BillFilter {
    /// Lenient: unknown taxonomy codes and tag keys are dropped rather than rejected.
    pub fn from_params(params: &BillQueryParams) -> Self {
        let mut tags: Vec<&'static TagDefinition> = Vec::new();
        for tag in params.tags.iter().filter_map(|key| find_tag(key)) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Self {
            state: selected(params.state.as_deref()).map(str::to_string),
            taxonomy_code: selected(params.taxonomy_code.as_deref())
                .and_then(|value| value.parse().ok()),
            search: params
                .search
                .as_deref()
                .filter(|value| !value.is_empty())
                .map(str::to_string),
            hide_not_relevant: params
                .hide_nr
                .as_deref()
                .map(|value| value.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
            tags,
        }
    }

    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(state) = &self.state {
            predicates.push(Predicate::State(state.clone()));
        }
        if let Some(code) = self.taxonomy_code {
            predicates.push(Predicate::Taxonomy(code));
        }
        if self.hide_not_relevant {
            predicates.push(Predicate::ExcludeTaxonomy(TaxonomyCode::NR));
        }
        if let Some(search) = &self.search {
            predicates.push(Predicate::Search(search.clone()));
        }
        predicates.extend(self.tags.iter().copied().map(Predicate::Tag));

        predicates
    }
}

impl Predicate {
    pub fn push_sql(&self, query: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Self::State(state) => {
                query.push("state = ");
                query.push_bind(state.clone());
            }
            Self::Taxonomy(code) => {
                query.push("taxonomy_code = ");
                query.push_bind(code.as_str());
            }
            Self::ExcludeTaxonomy(code) => {
                query.push("taxonomy_code <> ");
                query.push_bind(code.as_str());
            }
            Self::Search(term) => {
                let pattern = format!("%{}%", escape_like(term));
                query.push("(bill ILIKE ");
                query.push_bind(pattern.clone());
                query.push(" OR state ILIKE ");
                query.push_bind(pattern);
                query.push(")");
            }
            // Column names only ever come from the static tag table.
            Self::Tag(tag) => {
                query.push(tag.key);
                query.push(" = true");
            }
        }
    }
}

pub fn build_bills_query(filter: &BillFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT * FROM {BILL_TABLE}"));

    for (index, predicate) in filter.predicates().iter().enumerate() {
        query.push(if index == 0 { " WHERE " } else { " AND " });
        predicate.push_sql(&mut query);
    }

    query.push(" ORDER BY state, bill");
    query
}

fn selected(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty() && *value != ALL_SENTINEL)
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
