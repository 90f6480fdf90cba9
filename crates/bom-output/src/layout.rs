//! Presentation layout for an enriched table.
//!
//! Coordinates are spreadsheet coordinates: 1-based, header on row 1, first
//! data row on row 2.

use serde::{Deserialize, Serialize};

use bom_core::EnrichedTable;
use bom_model::Table;

pub const MIN_COLUMN_WIDTH: usize = 8;
pub const MAX_COLUMN_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    LightGray,
    LightPink,
}

impl Fill {
    /// RGB hex code of the fill color.
    pub fn rgb(self) -> &'static str {
        match self {
            Self::LightGray => "D3D3D3",
            Self::LightPink => "FFB6C1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    General,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    Thin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellStyle {
    pub bold: bool,
    pub fill: Option<Fill>,
    pub horizontal: HorizontalAlignment,
}

impl CellStyle {
    pub fn header() -> Self {
        Self {
            bold: true,
            fill: Some(Fill::LightGray),
            horizontal: HorizontalAlignment::Center,
        }
    }

    pub fn missing_value() -> Self {
        Self {
            bold: false,
            fill: Some(Fill::LightPink),
            horizontal: HorizontalAlignment::General,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub column: usize,
}

impl CellRef {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// A1-style reference, e.g. `C7`.
    pub fn a1(self) -> String {
        format!("{}{}", column_letter(self.column), self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    pub start: CellRef,
    pub end: CellRef,
}

impl CellRange {
    pub fn a1(self) -> String {
        format!("{}:{}", self.start.a1(), self.end.a1())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    pub range: CellRange,
    pub outside: BorderStyle,
    pub inside: BorderStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub header_style: CellStyle,
    pub highlight_style: CellStyle,
    /// Cells left blank because a match lacked the attribute.
    pub highlights: Vec<CellRef>,
    /// Width in characters, one entry per column.
    pub column_widths: Vec<usize>,
    /// `None` for a table with no columns.
    pub borders: Option<Borders>,
}

impl SheetLayout {
    pub fn from_enriched(enriched: &EnrichedTable) -> Self {
        let mut highlights: Vec<CellRef> = enriched
            .missing_cells()
            .map(|(row_index, column)| CellRef::new(row_index + 2, column))
            .collect();
        highlights.sort();
        Self::for_table(&enriched.table, highlights)
    }

    pub fn for_table(table: &Table, highlights: Vec<CellRef>) -> Self {
        let columns = table.column_count();
        let borders = (columns > 0).then(|| Borders {
            range: CellRange {
                start: CellRef::new(1, 1),
                end: CellRef::new(table.rows.len() + 1, columns),
            },
            outside: BorderStyle::Thin,
            inside: BorderStyle::Thin,
        });
        Self {
            header_style: CellStyle::header(),
            highlight_style: CellStyle::missing_value(),
            highlights,
            column_widths: column_widths(table),
            borders,
        }
    }

    pub fn is_highlighted(&self, cell: CellRef) -> bool {
        self.highlights.binary_search(&cell).is_ok()
    }
}

/// Content-fitted widths: the longest header or cell text per column,
/// clamped to [`MIN_COLUMN_WIDTH`]..=[`MAX_COLUMN_WIDTH`].
pub fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths = vec![0usize; table.column_count()];
    for (index, header) in table.headers.iter().enumerate() {
        widths[index] = widths[index].max(header.chars().count());
    }
    for row in &table.rows {
        for (index, cell) in row.cells.iter().enumerate() {
            widths[index] = widths[index].max(cell.as_str().chars().count());
        }
    }
    widths
        .into_iter()
        .map(|width| width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH))
        .collect()
}

/// Spreadsheet column letters for a 1-based column number (`1` → `A`,
/// `28` → `AB`).
pub fn column_letter(mut column: usize) -> String {
    let mut letters = Vec::new();
    while column > 0 {
        let remainder = (column - 1) % 26;
        letters.push(char::from(b'A' + remainder as u8));
        column = (column - 1) / 26;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters() {
        assert_eq!(column_letter(1), "A");
        assert_eq!(column_letter(26), "Z");
        assert_eq!(column_letter(27), "AA");
        assert_eq!(column_letter(28), "AB");
        assert_eq!(column_letter(702), "ZZ");
        assert_eq!(column_letter(703), "AAA");
        assert_eq!(CellRef::new(7, 3).a1(), "C7");
    }

    #[test]
    fn styles_use_named_fills() {
        assert_eq!(CellStyle::header().fill.map(Fill::rgb), Some("D3D3D3"));
        assert_eq!(CellStyle::missing_value().fill.map(Fill::rgb), Some("FFB6C1"));
    }
}
