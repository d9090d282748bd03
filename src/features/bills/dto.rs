use serde::Serialize;
use serde::ser::SerializeMap;
use serde_json::{Map, Value};

use crate::features::definitions::{TAG_COUNT, TAG_DEFINITIONS, TagDefinition, TaxonomyCode, tag_index};

/// Presence flags for every defined tag, indexed in `TAG_DEFINITIONS` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagFlags([bool; TAG_COUNT]);

impl TagFlags {
    /// Unknown keys are ignored.
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut flags = Self::default();
        for key in keys {
            if let Some(index) = tag_index(key) {
                flags.0[index] = true;
            }
        }
        flags
    }

    pub fn set(&mut self, index: usize, value: bool) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = value;
        }
    }

    pub fn is_set(&self, key: &str) -> bool {
        tag_index(key).is_some_and(|index| self.0[index])
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|flag| **flag).count()
    }

    pub fn active(&self) -> impl Iterator<Item = &'static TagDefinition> + '_ {
        TAG_DEFINITIONS
            .iter()
            .zip(self.0.iter())
            .filter(|(_, flag)| **flag)
            .map(|(tag, _)| tag)
    }
}

impl Serialize for TagFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(TAG_COUNT))?;
        for (tag, flag) in TAG_DEFINITIONS.iter().zip(self.0.iter()) {
            map.serialize_entry(tag.key, flag)?;
        }
        map.end()
    }
}

/// One row of `bill_data` as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillRecord {
    pub state: String,
    pub bill: String,
    pub status: Option<String>,
    pub taxonomy_code: TaxonomyCode,
    pub tags: TagFlags,
    /// Columns of the row that are not modelled above, keyed by column name.
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillDto {
    pub state: String,
    pub bill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub taxonomy_code: TaxonomyCode,
    #[serde(flatten)]
    pub tags: TagFlags,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub tag_count: usize,
    pub link: String,
    pub active_tags: Vec<&'static str>,
}

/// Raw `/api/bills` query string values before any normalisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillQueryParams {
    pub state: Option<String>,
    pub taxonomy_code: Option<String>,
    pub search: Option<String>,
    pub hide_nr: Option<String>,
    pub tags: Vec<String>,
}
