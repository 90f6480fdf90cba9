//! Header name to column position mapping.
//!
//! A [`ColumnMap`] is built once per table from its header row and is
//! read-only afterwards. Positions are 1-based, matching spreadsheet column
//! numbers; [`crate::Row`] converts them at the access boundary.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Header of the column holding the lookup key.
pub const IDENTIFIER_COLUMN: &str = "PartNumber";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    entries: Vec<(String, usize)>,
    identifier_position: usize,
}

impl ColumnMap {
    /// Build a map from already-normalized `(name, position)` entries.
    ///
    /// Names must be non-empty and unique, positions must be at least 1, and
    /// one entry must be named [`IDENTIFIER_COLUMN`].
    pub fn try_new(entries: Vec<(String, usize)>) -> Result<Self> {
        for (idx, (name, position)) in entries.iter().enumerate() {
            if name.is_empty() {
                return Err(ModelError::EmptyColumnName {
                    position: *position,
                });
            }
            if *position == 0 {
                return Err(ModelError::InvalidPosition {
                    name: name.clone(),
                    position: *position,
                });
            }
            if entries[..idx].iter().any(|(other, _)| other == name) {
                return Err(ModelError::DuplicateColumn(name.clone()));
            }
        }
        let identifier_position = entries
            .iter()
            .find(|(name, _)| name == IDENTIFIER_COLUMN)
            .map(|(_, position)| *position)
            .ok_or(ModelError::MissingIdentifierColumn(IDENTIFIER_COLUMN))?;
        Ok(Self {
            entries,
            identifier_position,
        })
    }

    pub fn identifier_position(&self) -> usize {
        self.identifier_position
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, position)| *position)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entries in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(name, position)| (name.as_str(), *position))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[(&str, usize)]) -> Vec<(String, usize)> {
        names
            .iter()
            .map(|(name, position)| ((*name).to_string(), *position))
            .collect()
    }

    #[test]
    fn resolves_identifier_position() {
        let map = ColumnMap::try_new(entries(&[("Price", 1), ("PartNumber", 3)])).unwrap();
        assert_eq!(map.identifier_position(), 3);
        assert_eq!(map.get("Price"), Some(1));
        assert_eq!(map.get("Stock"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn rejects_invalid_entries() {
        assert_eq!(
            ColumnMap::try_new(entries(&[("Price", 1)])),
            Err(ModelError::MissingIdentifierColumn(IDENTIFIER_COLUMN))
        );
        assert_eq!(
            ColumnMap::try_new(entries(&[("PartNumber", 1), ("PartNumber", 2)])),
            Err(ModelError::DuplicateColumn("PartNumber".to_string()))
        );
        assert!(matches!(
            ColumnMap::try_new(entries(&[("PartNumber", 0)])),
            Err(ModelError::InvalidPosition { .. })
        ));
        assert!(matches!(
            ColumnMap::try_new(entries(&[("", 1), ("PartNumber", 2)])),
            Err(ModelError::EmptyColumnName { position: 1 })
        ));
    }
}
