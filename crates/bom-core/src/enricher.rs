//! Per-row merge of catalog attributes into a table row.

use tracing::{debug, trace, warn};

use bom_lookup::LookupClient;
use bom_map::{ColumnPlan, ColumnRole};
use bom_model::{CellOutcome, CellValue, LookupFailure, LookupResult, Row, RowOutcome};

/// Result of enriching one row: the row-level outcome and one cell outcome
/// per planned column, in plan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReport {
    pub outcome: RowOutcome,
    pub cells: Vec<CellOutcome>,
}

pub struct RowEnricher<'a> {
    plan: &'a ColumnPlan,
}

impl<'a> RowEnricher<'a> {
    pub fn new(plan: &'a ColumnPlan) -> Self {
        Self { plan }
    }

    /// Identifier of a row, or `None` when it is blank.
    pub fn identifier<'r>(&self, row: &'r Row) -> Option<&'r str> {
        let value = row.text(self.plan.identifier_position);
        (!value.trim().is_empty()).then_some(value)
    }

    /// Merge a lookup result into `row`.
    ///
    /// Only attribute columns are written, and only when the lookup found a
    /// match. A matched attribute with no value is blanked and reported as
    /// [`CellOutcome::Missing`]. The identifier and unrecognized columns are
    /// never touched.
    pub fn enrich(&self, row: &mut Row, result: &LookupResult) -> Vec<CellOutcome> {
        let LookupResult::Found(record) = result else {
            return vec![CellOutcome::Unchanged; self.plan.columns.len()];
        };
        self.plan
            .columns
            .iter()
            .map(|column| match column.role {
                ColumnRole::Identifier | ColumnRole::Passthrough => CellOutcome::Unchanged,
                ColumnRole::Attribute(attribute) => match record.get(attribute) {
                    Some(value) => {
                        row.set_cell(column.position, CellValue::from(value));
                        CellOutcome::Filled(value.to_string())
                    }
                    None => {
                        row.set_cell(column.position, CellValue::Empty);
                        CellOutcome::Missing
                    }
                },
            })
            .collect()
    }

    /// Look up and enrich a single row. Rows with a blank identifier are
    /// skipped without issuing a lookup.
    pub fn process<C>(&self, index: usize, row: &mut Row, client: &C) -> RowReport
    where
        C: LookupClient + ?Sized,
    {
        let Some(identifier) = self.identifier(row) else {
            trace!(row = index, "blank identifier, row skipped");
            return RowReport {
                outcome: RowOutcome::Skipped,
                cells: vec![CellOutcome::Unchanged; self.plan.columns.len()],
            };
        };
        let identifier = identifier.to_string();
        let (outcome, result) = match client.lookup_detailed(&identifier) {
            Ok(record) => (RowOutcome::Matched, LookupResult::Found(record)),
            Err(error) => {
                let failure = error.failure();
                if failure == LookupFailure::NoMatch {
                    debug!(row = index, identifier = %identifier, "no catalog match");
                } else {
                    warn!(row = index, identifier = %identifier, %error, "catalog lookup failed");
                }
                (RowOutcome::Unmatched(failure), LookupResult::NotFound)
            }
        };
        let cells = self.enrich(row, &result);
        debug!(row = index, identifier = %identifier, ?outcome, "row enriched");
        RowReport { outcome, cells }
    }
}
