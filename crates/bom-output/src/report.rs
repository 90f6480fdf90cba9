//! JSON sidecar describing how an enriched table should be presented.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bom_core::EnrichedTable;
use bom_model::EnrichmentSummary;

use crate::layout::SheetLayout;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightReport {
    pub generated_at: DateTime<Utc>,
    pub source: Option<PathBuf>,
    pub summary: EnrichmentSummary,
    /// A1 references of cells needing manual attention.
    pub missing_cells: Vec<String>,
    pub layout: SheetLayout,
}

impl HighlightReport {
    pub fn new(enriched: &EnrichedTable, source: Option<&Path>) -> Self {
        let layout = SheetLayout::from_enriched(enriched);
        Self {
            generated_at: Utc::now(),
            source: source.map(Path::to_path_buf),
            summary: enriched.summary.clone(),
            missing_cells: layout.highlights.iter().map(|cell| cell.a1()).collect(),
            layout,
        }
    }
}

pub fn write_highlight_report(path: &Path, report: &HighlightReport) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("write report: {}", path.display()))?;
    Ok(())
}
