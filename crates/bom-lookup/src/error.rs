//! Error types for catalog lookups.

use thiserror::Error;

use bom_model::LookupFailure;

/// Why a lookup produced no record.
///
/// The enricher treats every variant the same way (the row is left as it
/// was), but the variants are kept apart so they can be counted and logged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// The service answered with an empty or absent `results` array.
    #[error("no catalog match")]
    NoMatch,

    /// Connection failure, timeout, or unreadable body.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("catalog service returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The body was not a search response.
    #[error("invalid search response: {0}")]
    Decode(String),
}

impl LookupError {
    #[must_use]
    pub fn failure(&self) -> LookupFailure {
        match self {
            Self::NoMatch => LookupFailure::NoMatch,
            Self::Network(_) | Self::Status { .. } => LookupFailure::Transport,
            Self::Decode(_) => LookupFailure::Decode,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
