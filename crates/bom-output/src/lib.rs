//! Enriched table output.
//!
//! - **Delimited text**: the enriched table in the input's column layout
//! - **Sheet layout**: header styling, missing-value highlights, column
//!   widths, and borders for whatever renders the final spreadsheet
//! - **Highlight report**: the layout plus run summary as JSON

pub mod layout;
mod report;
mod writer;

pub use layout::{
    BorderStyle, Borders, CellRange, CellRef, CellStyle, Fill, HorizontalAlignment,
    MAX_COLUMN_WIDTH, MIN_COLUMN_WIDTH, SheetLayout, column_letter, column_widths,
};
pub use report::{HighlightReport, write_highlight_report};
pub use writer::write_table;
