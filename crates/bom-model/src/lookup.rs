//! Lookup results handed from the catalog client to the row enricher.

use serde::{Deserialize, Serialize};

use crate::attribute::PartAttribute;

/// Attributes extracted from the best catalog match for one identifier.
///
/// Every member is optional. A member that is `None`, empty, or
/// whitespace-only is a field gap for the corresponding column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRecord {
    pub manufacturer: Option<String>,
    pub description: Option<String>,
    pub lifecycle: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub representative_parts: Option<String>,
}

impl PartRecord {
    pub fn get(&self, attribute: PartAttribute) -> Option<&str> {
        let value = match attribute {
            PartAttribute::Manufacturer => &self.manufacturer,
            PartAttribute::Description => &self.description,
            PartAttribute::Lifecycle => &self.lifecycle,
            PartAttribute::Price => &self.price,
            PartAttribute::Stock => &self.stock,
            PartAttribute::RepresentativeParts => &self.representative_parts,
        };
        value
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }

    pub fn set(&mut self, attribute: PartAttribute, value: Option<String>) {
        let slot = match attribute {
            PartAttribute::Manufacturer => &mut self.manufacturer,
            PartAttribute::Description => &mut self.description,
            PartAttribute::Lifecycle => &mut self.lifecycle,
            PartAttribute::Price => &mut self.price,
            PartAttribute::Stock => &mut self.stock,
            PartAttribute::RepresentativeParts => &mut self.representative_parts,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(PartRecord),
    NotFound,
}

/// Why a lookup produced no record. All variants merge identically; they
/// only differ in how they are counted and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupFailure {
    /// The service answered but had no result for the identifier.
    NoMatch,
    /// Connection, timeout, or non-success status.
    Transport,
    /// The body was not a readable search response.
    Decode,
}
