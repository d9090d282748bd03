use axum::Json;

use crate::features::definitions::dto::DefinitionsDto;
use crate::features::definitions::{TAG_DEFINITIONS, TAXONOMY_DEFINITIONS};

pub fn definitions() -> DefinitionsDto {
    DefinitionsDto {
        tags: &TAG_DEFINITIONS,
        taxonomy: &TAXONOMY_DEFINITIONS,
    }
}

pub async fn handle_definitions() -> Json<DefinitionsDto> {
    Json(definitions())
}
