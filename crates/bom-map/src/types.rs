//! Column roles derived from a [`ColumnMap`].

use serde::{Deserialize, Serialize};

use bom_model::{ColumnMap, IDENTIFIER_COLUMN, PartAttribute};

/// How the enricher treats a mapped column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "attribute", rename_all = "snake_case")]
pub enum ColumnRole {
    /// The lookup key. Never written.
    Identifier,
    /// Filled from the matching catalog attribute.
    Attribute(PartAttribute),
    /// Unknown to the catalog; passed through untouched.
    Passthrough,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedColumn {
    pub name: String,
    /// 1-based column position.
    pub position: usize,
    pub role: ColumnRole,
}

/// Role assignment for every column of a [`ColumnMap`], in header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPlan {
    pub identifier_position: usize,
    pub columns: Vec<PlannedColumn>,
}

impl ColumnPlan {
    pub fn from_map(map: &ColumnMap) -> Self {
        let columns = map
            .iter()
            .map(|(name, position)| PlannedColumn {
                name: name.to_string(),
                position,
                role: classify(name),
            })
            .collect();
        Self {
            identifier_position: map.identifier_position(),
            columns,
        }
    }

    pub fn attribute_columns(&self) -> impl Iterator<Item = (PartAttribute, usize)> + '_ {
        self.columns.iter().filter_map(|column| match column.role {
            ColumnRole::Attribute(attribute) => Some((attribute, column.position)),
            _ => None,
        })
    }

    pub fn passthrough_columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns
            .iter()
            .filter(|column| column.role == ColumnRole::Passthrough)
            .map(|column| column.name.as_str())
    }
}

fn classify(name: &str) -> ColumnRole {
    if name == IDENTIFIER_COLUMN {
        return ColumnRole::Identifier;
    }
    PartAttribute::from_column_name(name)
        .map_or(ColumnRole::Passthrough, ColumnRole::Attribute)
}
