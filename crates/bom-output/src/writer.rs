use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::debug;

use bom_ingest::TableFormat;
use bom_model::{CellValue, Table};

/// Write `table` as delimited text, header first, rows in order. The
/// delimiter follows the output extension. Rows are padded to the table's
/// widest row.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let format = TableFormat::from_path(path)?;
    let mut writer = WriterBuilder::new()
        .delimiter(format.delimiter())
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    let width = table.column_count();

    let mut header: Vec<&str> = table.headers.iter().map(String::as_str).collect();
    header.resize(width, "");
    writer
        .write_record(&header)
        .with_context(|| format!("write header: {}", path.display()))?;

    for (index, row) in table.rows.iter().enumerate() {
        let mut record: Vec<&str> = row.cells.iter().map(CellValue::as_str).collect();
        record.resize(width, "");
        writer
            .write_record(&record)
            .with_context(|| format!("write row {}: {}", index + 1, path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    debug!(path = %path.display(), rows = table.rows.len(), "table written");
    Ok(())
}
