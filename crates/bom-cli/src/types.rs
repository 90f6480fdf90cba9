use std::path::PathBuf;

use bom_model::EnrichmentSummary;

#[derive(Debug, Default)]
pub struct RunResult {
    pub files: Vec<FileSummary>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct FileSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: Option<PathBuf>,
    pub summary: EnrichmentSummary,
}
