//! Whole-table enrichment.
//!
//! A job maps the header once, then looks up and merges every data row.
//! Rows are independent, so with more than one worker they are processed on
//! a bounded rayon pool. Results are collected by row index, so the output
//! keeps input order whatever order lookups complete in.

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, info_span};

use bom_lookup::{HttpLookupClient, LookupClient, LookupConfig};
use bom_map::{ColumnMapper, ColumnPlan};
use bom_model::{CellOutcome, EnrichmentSummary, Row, RowOutcome, Table};

use crate::enricher::{RowEnricher, RowReport};
use crate::error::{EnrichError, Result};
use crate::options::EnrichOptions;

/// An enriched table with everything needed to present it.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedTable {
    pub table: Table,
    pub plan: ColumnPlan,
    /// One entry per data row, in row order.
    pub row_outcomes: Vec<RowOutcome>,
    /// Per data row, one outcome per planned column in plan order.
    pub cell_outcomes: Vec<Vec<CellOutcome>>,
    pub summary: EnrichmentSummary,
}

impl EnrichedTable {
    /// Highlighted cells as `(data row index, 1-based column position)`.
    pub fn missing_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cell_outcomes
            .iter()
            .enumerate()
            .flat_map(move |(row_index, cells)| {
                self.plan
                    .columns
                    .iter()
                    .zip(cells)
                    .filter(|(_, outcome)| outcome.is_highlighted())
                    .map(move |(column, _)| (row_index, column.position))
            })
    }
}

pub struct EnrichmentJob<C> {
    client: C,
    options: EnrichOptions,
}

impl<C: LookupClient> EnrichmentJob<C> {
    pub fn new(client: C, options: EnrichOptions) -> Self {
        Self { client, options }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Enrich every data row of `table`.
    ///
    /// Fails only when the header has no identifier column; in that case no
    /// lookup is issued. Lookup failures stay confined to their row.
    pub fn run(&self, table: Table) -> Result<EnrichedTable> {
        let span = info_span!(
            "enrich",
            rows = table.rows.len(),
            workers = self.options.workers.max(1)
        );
        let _guard = span.enter();
        let start = Instant::now();

        let map = ColumnMapper::new().build(table.header_cells())?;
        let plan = ColumnPlan::from_map(&map);
        let passthrough: Vec<&str> = plan.passthrough_columns().collect();
        info!(
            attribute_columns = plan.attribute_columns().count(),
            passthrough_columns = ?passthrough,
            "column plan ready"
        );

        let Table { headers, mut rows } = table;
        let reports = self.process_rows(&plan, &mut rows)?;

        let mut summary = EnrichmentSummary::default();
        let mut row_outcomes = Vec::with_capacity(reports.len());
        let mut cell_outcomes = Vec::with_capacity(reports.len());
        for report in reports {
            summary.record(&report.outcome, &report.cells);
            row_outcomes.push(report.outcome);
            cell_outcomes.push(report.cells);
        }
        info!(
            rows_processed = summary.rows_processed,
            rows_matched = summary.rows_matched,
            rows_failed = summary.rows_failed,
            rows_skipped = summary.rows_skipped,
            transport_errors = summary.transport_errors,
            cells_missing = summary.cells_missing,
            duration_ms = start.elapsed().as_millis(),
            "enrichment complete"
        );

        Ok(EnrichedTable {
            table: Table { headers, rows },
            plan,
            row_outcomes,
            cell_outcomes,
            summary,
        })
    }

    fn process_rows(&self, plan: &ColumnPlan, rows: &mut [Row]) -> Result<Vec<RowReport>> {
        let enricher = RowEnricher::new(plan);
        if !self.options.is_parallel() {
            return Ok(rows
                .iter_mut()
                .enumerate()
                .map(|(index, row)| enricher.process(index, row, &self.client))
                .collect());
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.workers)
            .thread_name(|index| format!("bom-lookup-{index}"))
            .build()
            .map_err(|error| EnrichError::WorkerPool(error.to_string()))?;
        Ok(pool.install(|| {
            rows.par_iter_mut()
                .enumerate()
                .map(|(index, row)| enricher.process(index, row, &self.client))
                .collect()
        }))
    }
}

/// Enrich `table` against a catalog URL template containing
/// `{part_number}`.
pub fn run(table: Table, url_template: &str, options: EnrichOptions) -> Result<EnrichedTable> {
    run_with_config(table, url_template, LookupConfig::default(), options)
}

/// Like [`run`] with explicit transport settings. A table without an
/// identifier column is rejected before the client is built.
pub fn run_with_config(
    table: Table,
    url_template: &str,
    config: LookupConfig,
    options: EnrichOptions,
) -> Result<EnrichedTable> {
    ColumnMapper::new().build(table.header_cells())?;
    let client = HttpLookupClient::new(url_template, config)?;
    EnrichmentJob::new(client, options).run(table)
}
