//! File-level enrichment: read an input table, run the job, write outputs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use bom_core::{EnrichedTable, EnrichmentJob};
use bom_ingest::{enriched_output_path, list_table_files, read_table};
use bom_lookup::LookupClient;
use bom_output::{HighlightReport, write_highlight_report, write_table};

/// One input table and where its outputs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: Option<PathBuf>,
}

/// Resolve the input path (a file or a folder of tables) into requests.
///
/// For a folder, `output` names the folder outputs are written to. For a
/// file, it names the output file.
pub fn plan_requests(
    input: &Path,
    output: Option<&Path>,
    write_report: bool,
) -> Result<Vec<EnrichRequest>> {
    let inputs = if input.is_dir() {
        let files = list_table_files(input)?;
        if files.is_empty() {
            bail!("no .csv or .tsv tables found in {}", input.display());
        }
        files
    } else {
        vec![input.to_path_buf()]
    };
    let single_file = !input.is_dir();

    Ok(inputs
        .into_iter()
        .map(|path| {
            let default_output = enriched_output_path(&path);
            let output = match output {
                Some(target) if single_file => target.to_path_buf(),
                Some(dir) => dir.join(default_output.file_name().unwrap_or_default()),
                None => default_output,
            };
            let report = write_report.then(|| report_path(&output));
            EnrichRequest {
                input: path,
                output,
                report,
            }
        })
        .collect())
}

/// Report path for an output table: the full file name plus `.json`, so
/// `a_enriched.csv` and `a_enriched.tsv` get distinct reports.
pub fn report_path(output: &Path) -> PathBuf {
    let mut name = output.file_name().unwrap_or_default().to_os_string();
    name.push(".json");
    output.with_file_name(name)
}

/// Enrich one table and write its outputs.
///
/// A structural problem with the table (no `PartNumber` column) is returned
/// before anything is written.
pub fn enrich_file<C: LookupClient>(
    job: &EnrichmentJob<C>,
    request: &EnrichRequest,
) -> Result<EnrichedTable> {
    let span = info_span!("file", input = %request.input.display());
    let _guard = span.enter();

    let table = read_table(&request.input)?;
    let enriched = job
        .run(table)
        .with_context(|| format!("enrich {}", request.input.display()))?;

    if let Some(parent) = request.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output folder {}", parent.display()))?;
    }
    write_table(&request.output, &enriched.table)?;
    if let Some(report_path) = &request.report {
        let report = HighlightReport::new(&enriched, Some(request.input.as_path()));
        write_highlight_report(report_path, &report)?;
    }
    info!(
        output = %request.output.display(),
        missing_cells = enriched.summary.cells_missing,
        "outputs written"
    );
    Ok(enriched)
}
