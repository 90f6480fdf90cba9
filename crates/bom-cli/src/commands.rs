use std::time::Duration;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{error, info_span};

use bom_cli::run::{enrich_file, plan_requests};
use bom_core::{EnrichOptions, EnrichmentJob};
use bom_lookup::{HttpLookupClient, LookupConfig};
use bom_model::{IDENTIFIER_COLUMN, PartAttribute};
use bom_output::SheetLayout;

use crate::cli::EnrichArgs;
use crate::summary::{apply_table_style, print_preview};
use crate::types::{FileSummary, RunResult};

pub fn run_attributes() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Catalog field"]);
    apply_table_style(&mut table);
    table.add_row(vec![IDENTIFIER_COLUMN, "(lookup key, never written)"]);
    for attribute in PartAttribute::ALL {
        table.add_row(vec![attribute.column_name(), attribute.field_name()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_enrich(args: &EnrichArgs) -> Result<RunResult> {
    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();

    let requests = plan_requests(&args.input, args.output.as_deref(), !args.no_report)?;
    let config = LookupConfig::default().with_timeout(Duration::from_secs(args.timeout_secs));
    let client = HttpLookupClient::new(args.api_url.as_str(), config)
        .context("create catalog client")?;
    let job = EnrichmentJob::new(client, EnrichOptions::default().with_workers(args.workers));

    let mut result = RunResult::default();
    for request in &requests {
        match enrich_file(&job, request) {
            Ok(enriched) => {
                if let Some(limit) = args.preview {
                    let layout = SheetLayout::from_enriched(&enriched);
                    print_preview(&request.input, &enriched.table, &layout, limit);
                }
                result.files.push(FileSummary {
                    input: request.input.clone(),
                    output: request.output.clone(),
                    report: request.report.clone(),
                    summary: enriched.summary,
                });
            }
            Err(err) => {
                error!(input = %request.input.display(), error = %format!("{err:#}"), "enrichment failed");
                result.errors.push(format!("{}: {err:#}", request.input.display()));
                result.has_errors = true;
            }
        }
    }
    Ok(result)
}
