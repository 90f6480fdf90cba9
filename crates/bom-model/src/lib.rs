pub mod attribute;
pub mod column_map;
pub mod error;
pub mod lookup;
pub mod outcome;
pub mod table;

pub use attribute::PartAttribute;
pub use column_map::{ColumnMap, IDENTIFIER_COLUMN};
pub use error::{ModelError, Result};
pub use lookup::{LookupFailure, LookupResult, PartRecord};
pub use outcome::{CellOutcome, EnrichmentSummary, RowOutcome};
pub use table::{CellValue, Row, Table};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_row_outcomes() {
        let mut summary = EnrichmentSummary::default();
        summary.record(
            &RowOutcome::Matched,
            &[
                CellOutcome::Unchanged,
                CellOutcome::Filled("Acme".to_string()),
                CellOutcome::Missing,
            ],
        );
        summary.record(&RowOutcome::Unmatched(LookupFailure::Transport), &[]);
        summary.record(&RowOutcome::Unmatched(LookupFailure::NoMatch), &[]);
        summary.record(&RowOutcome::Skipped, &[]);

        assert_eq!(summary.rows_processed, 4);
        assert_eq!(summary.rows_matched, 1);
        assert_eq!(summary.rows_failed, 2);
        assert_eq!(summary.rows_skipped, 1);
        assert_eq!(summary.transport_errors, 1);
        assert_eq!(summary.rows_not_found, 1);
        assert_eq!(summary.cells_filled, 1);
        assert_eq!(summary.cells_missing, 1);
    }

    #[test]
    fn summary_serializes() {
        let summary = EnrichmentSummary {
            rows_processed: 3,
            rows_matched: 2,
            rows_failed: 1,
            ..EnrichmentSummary::default()
        };
        let json = serde_json::to_string(&summary).expect("serialize summary");
        let round: EnrichmentSummary = serde_json::from_str(&json).expect("deserialize summary");
        assert_eq!(round, summary);
    }
}
