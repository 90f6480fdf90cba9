#![deny(unsafe_code)]

//! Part enrichment engine.
//!
//! [`EnrichmentJob::run`] maps a table's header, looks up every part number,
//! and merges catalog attributes into the matching columns. Attributes a
//! match does not supply are blanked and flagged for highlighting.

pub mod enricher;
pub mod error;
pub mod job;
pub mod options;

pub use enricher::{RowEnricher, RowReport};
pub use error::{EnrichError, Result};
pub use job::{EnrichedTable, EnrichmentJob, run, run_with_config};
pub use options::EnrichOptions;
