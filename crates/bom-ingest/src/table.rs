//! Delimited text tables.
//!
//! The first record is the header; every later record is a data row. Cell
//! text is kept verbatim so identifiers round-trip byte for byte. Only the
//! header names lose a leading byte-order mark.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use bom_model::{CellValue, Row, Table};

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tsv,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(IngestError::UnsupportedExtension {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }

    pub fn delimiter(self) -> u8 {
        match self {
            Self::Csv => b',',
            Self::Tsv => b'\t',
        }
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

/// Read a table from a `.csv` or `.tsv` file.
pub fn read_table(path: &Path) -> Result<Table> {
    let format = TableFormat::from_path(path)?;
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(format.delimiter())
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let table = collect_table(reader, path)?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "table loaded"
    );
    Ok(table)
}

/// Read a table from any reader. `source` only labels errors.
pub fn read_table_from_reader<R: Read>(
    reader: R,
    format: TableFormat,
    source: &Path,
) -> Result<Table> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(format.delimiter())
        .from_reader(reader);
    collect_table(reader, source)
}

fn collect_table<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Table> {
    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            return Err(IngestError::Empty {
                path: path.to_path_buf(),
            });
        }
    };
    let headers: Vec<String> = header.iter().map(normalize_header).collect();
    let mut table = Table::new(headers);
    for record in records {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let mut cells: Vec<CellValue> = record.iter().map(CellValue::from).collect();
        if cells.len() < table.headers.len() {
            cells.resize(table.headers.len(), CellValue::Empty);
        }
        table.push_row(Row::new(cells));
    }
    Ok(table)
}
