use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("column name must not be empty (position {position})")]
    EmptyColumnName { position: usize },
    #[error("column positions are 1-based, got {position} for '{name}'")]
    InvalidPosition { name: String, position: usize },
    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),
    #[error("table must contain a '{0}' column")]
    MissingIdentifierColumn(&'static str),
}

pub type Result<T> = std::result::Result<T, ModelError>;
