//! Error types for column mapping.

use std::fmt;

use bom_model::ModelError;

/// Structural problems with a table header. Any of these aborts the job
/// before a single row is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// No header cell is named after the identifier column.
    MissingIdentifierColumn(String),
    /// The header produced a map that violates a model invariant.
    InvalidHeader(ModelError),
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingIdentifierColumn(name) => {
                write!(f, "table must contain a '{name}' column")
            }
            Self::InvalidHeader(error) => write!(f, "invalid header row: {error}"),
        }
    }
}

impl std::error::Error for MappingError {}

impl From<ModelError> for MappingError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::MissingIdentifierColumn(name) => {
                Self::MissingIdentifierColumn(name.to_string())
            }
            other => Self::InvalidHeader(other),
        }
    }
}
