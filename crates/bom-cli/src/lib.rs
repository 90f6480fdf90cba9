//! CLI library components for the part enricher.

pub mod logging;
pub mod run;
