use serde::Serialize;

use crate::features::definitions::TagDefinition;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct TaxonomyCount {
    pub taxonomy_code: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct StateCount {
    pub state: String,
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagCount {
    pub tag: &'static TagDefinition,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagStatDto {
    pub name: &'static str,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsDto {
    pub total_bills: i64,
    pub taxonomy_summary: Vec<TaxonomyCount>,
    pub state_summary: Vec<StateCount>,
    pub tag_stats: Vec<TagStatDto>,
}
