//! Part attributes the enrichment engine knows how to populate.

use serde::{Deserialize, Serialize};

/// A recognized attribute: a column name in the input table paired with the
/// field of a catalog search result that supplies its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartAttribute {
    Manufacturer,
    Description,
    Lifecycle,
    Price,
    Stock,
    RepresentativeParts,
}

impl PartAttribute {
    /// Every recognized attribute, in table column order.
    pub const ALL: [PartAttribute; 6] = [
        Self::Manufacturer,
        Self::Description,
        Self::Lifecycle,
        Self::Price,
        Self::Stock,
        Self::RepresentativeParts,
    ];

    /// Column header that selects this attribute (case-sensitive).
    #[must_use]
    pub fn column_name(self) -> &'static str {
        match self {
            Self::Manufacturer => "Manufacturer",
            Self::Description => "Description",
            Self::Lifecycle => "Lifecycle",
            Self::Price => "Price",
            Self::Stock => "Stock",
            Self::RepresentativeParts => "RepresentativeParts",
        }
    }

    /// Path of the source field inside a search result.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Manufacturer => "manufacturer",
            Self::Description => "description",
            Self::Lifecycle => "lifecycle",
            Self::Price => "price.USD",
            Self::Stock => "stock",
            Self::RepresentativeParts => "representativeParts[].partNumber",
        }
    }

    /// Resolve a header to an attribute using an exact, case-sensitive match.
    #[must_use]
    pub fn from_column_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.column_name() == name)
    }
}

impl std::fmt::Display for PartAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}
