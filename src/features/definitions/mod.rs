pub mod dto;
pub mod handler;
pub mod tags;
pub mod taxonomy;

pub use dto::DefinitionsDto;
pub use handler::{definitions, handle_definitions};
pub use tags::{TAG_COUNT, TAG_DEFINITIONS, TagDefinition, find_tag, tag_index};
pub use taxonomy::{TAXONOMY_DEFINITIONS, TaxonomyCode, TaxonomyDefinition, UnknownTaxonomyCode};
