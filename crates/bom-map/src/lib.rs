#![deny(unsafe_code)]

//! Header discovery for part tables.
//!
//! [`ColumnMapper::build`] turns the first row of a table into a
//! [`ColumnMap`]; [`ColumnPlan`] then tags each mapped column with the role
//! the enricher gives it.

pub mod error;
pub mod types;

use bom_model::ColumnMap;
use tracing::{debug, warn};

pub use error::MappingError;
pub use types::{ColumnPlan, ColumnRole, PlannedColumn};

pub struct ColumnMapper;

impl ColumnMapper {
    pub fn new() -> Self {
        Self
    }

    /// Build a column map from `(name, position)` header cells.
    ///
    /// Names are trimmed and empty names are ignored. When a name repeats,
    /// the later position replaces the earlier one while the name keeps its
    /// first slot in header order.
    pub fn build<'a, I>(&self, header: I) -> Result<ColumnMap, MappingError>
    where
        I: IntoIterator<Item = (&'a str, usize)>,
    {
        let mut entries: Vec<(String, usize)> = Vec::new();
        for (raw, position) in header {
            let name = raw.trim();
            if name.is_empty() {
                continue;
            }
            if let Some(entry) = entries.iter_mut().find(|(existing, _)| existing == name) {
                warn!(
                    column = name,
                    previous = entry.1,
                    position,
                    "duplicate column header, later position wins"
                );
                entry.1 = position;
                continue;
            }
            entries.push((name.to_string(), position));
        }
        let map = ColumnMap::try_new(entries)?;
        debug!(
            columns = map.len(),
            identifier_position = map.identifier_position(),
            "column map built"
        );
        Ok(map)
    }
}

impl Default for ColumnMapper {
    fn default() -> Self {
        Self::new()
    }
}
