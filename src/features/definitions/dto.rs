use serde::Serialize;

use crate::features::definitions::{TagDefinition, TaxonomyDefinition};

#[derive(Debug, Clone, Serialize)]
pub struct DefinitionsDto {
    pub tags: &'static [TagDefinition],
    pub taxonomy: &'static [TaxonomyDefinition],
}
