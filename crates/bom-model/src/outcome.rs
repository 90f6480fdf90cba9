use serde::{Deserialize, Serialize};

use crate::lookup::LookupFailure;

/// What enrichment did to a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellOutcome {
    Filled(String),
    /// A match was found but it carried no value for this column.
    Missing,
    Unchanged,
}

impl CellOutcome {
    /// Missing cells are highlighted for manual follow-up.
    pub fn is_highlighted(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum RowOutcome {
    /// Blank identifier; no lookup was issued.
    Skipped,
    Matched,
    Unmatched(LookupFailure),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnrichmentSummary {
    /// Every data row, skipped ones included.
    pub rows_processed: usize,
    pub rows_skipped: usize,
    pub rows_matched: usize,
    /// Rows whose lookup produced no record, for any reason.
    pub rows_failed: usize,
    pub rows_not_found: usize,
    pub transport_errors: usize,
    pub decode_errors: usize,
    pub cells_filled: usize,
    pub cells_missing: usize,
}

impl EnrichmentSummary {
    pub fn record(&mut self, row: &RowOutcome, cells: &[CellOutcome]) {
        self.rows_processed += 1;
        match row {
            RowOutcome::Skipped => self.rows_skipped += 1,
            RowOutcome::Matched => self.rows_matched += 1,
            RowOutcome::Unmatched(failure) => {
                self.rows_failed += 1;
                match failure {
                    LookupFailure::NoMatch => self.rows_not_found += 1,
                    LookupFailure::Transport => self.transport_errors += 1,
                    LookupFailure::Decode => self.decode_errors += 1,
                }
            }
        }
        for cell in cells {
            match cell {
                CellOutcome::Filled(_) => self.cells_filled += 1,
                CellOutcome::Missing => self.cells_missing += 1,
                CellOutcome::Unchanged => {}
            }
        }
    }
}
