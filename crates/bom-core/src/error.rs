use thiserror::Error;

use bom_lookup::LookupError;
use bom_map::MappingError;

/// Job-fatal errors. Row-level lookup failures never surface here.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error("failed to create lookup client: {0}")]
    Client(#[from] LookupError),
    #[error("failed to start worker pool: {0}")]
    WorkerPool(String),
}

impl EnrichError {
    /// True when the input table itself is unusable.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }
}

pub type Result<T> = std::result::Result<T, EnrichError>;
