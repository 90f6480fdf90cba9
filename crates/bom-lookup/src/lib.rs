//! Catalog lookups for part identifiers.
//!
//! [`HttpLookupClient`] expands a URL template with each identifier, issues a
//! GET, and decodes the first search result into a [`bom_model::PartRecord`].

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod template;

pub use client::{HttpLookupClient, LookupClient};
pub use config::{DEFAULT_TIMEOUT, LookupConfig};
pub use error::{LookupError, Result};
pub use response::{FIELD_EXTRACTORS, SearchHit, parse_search_response};
pub use template::{PART_NUMBER_PLACEHOLDER, UrlTemplate};
