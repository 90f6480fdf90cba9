use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bom_model::{EnrichmentSummary, Table as PartTable};
use bom_output::{CellRef, SheetLayout};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Matched"),
        header_cell("Not found"),
        header_cell("Errors"),
        header_cell("Skipped"),
        header_cell("Filled"),
        header_cell("Missing"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total = EnrichmentSummary::default();
    for file in &result.files {
        accumulate(&mut total, &file.summary);
        let name = file
            .input
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown");
        table.add_row(summary_row(Cell::new(name), &file.summary));
    }
    if result.files.len() > 1 {
        let label = Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold);
        table.add_row(summary_row(label, &total));
    }
    println!("{table}");

    for file in &result.files {
        println!("Output: {}", file.output.display());
        if let Some(report) = &file.report {
            println!("Highlight report: {}", report.display());
        }
    }
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn summary_row(label: Cell, summary: &EnrichmentSummary) -> Vec<Cell> {
    let lookup_errors = summary.transport_errors + summary.decode_errors;
    vec![
        label,
        Cell::new(summary.rows_processed),
        count_cell(summary.rows_matched, Color::Green),
        count_cell(summary.rows_not_found, Color::Yellow),
        count_cell(lookup_errors, Color::Red),
        dim_cell(summary.rows_skipped),
        Cell::new(summary.cells_filled),
        count_cell(summary.cells_missing, Color::Magenta),
    ]
}

fn accumulate(total: &mut EnrichmentSummary, summary: &EnrichmentSummary) {
    total.rows_processed += summary.rows_processed;
    total.rows_skipped += summary.rows_skipped;
    total.rows_matched += summary.rows_matched;
    total.rows_failed += summary.rows_failed;
    total.rows_not_found += summary.rows_not_found;
    total.transport_errors += summary.transport_errors;
    total.decode_errors += summary.decode_errors;
    total.cells_filled += summary.cells_filled;
    total.cells_missing += summary.cells_missing;
}

/// Render the first `limit` rows with the header styled and missing cells
/// highlighted, mirroring the spreadsheet layout.
pub fn print_preview(source: &Path, table: &PartTable, layout: &SheetLayout, limit: usize) {
    let mut preview = Table::new();
    preview.set_header(
        table
            .headers
            .iter()
            .map(|header| header_cell(header).set_alignment(CellAlignment::Center))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut preview);
    let columns = table.column_count();
    for (row_index, row) in table.rows.iter().take(limit).enumerate() {
        let cells: Vec<Cell> = (1..=columns)
            .map(|column| {
                let text = row.text(column);
                if layout.is_highlighted(CellRef::new(row_index + 2, column)) {
                    Cell::new("(missing)").fg(Color::Black).bg(Color::Magenta)
                } else {
                    Cell::new(text)
                }
            })
            .collect();
        preview.add_row(cells);
    }
    println!("Preview: {}", source.display());
    println!("{preview}");
    if table.rows.len() > limit {
        println!("... {} more rows", table.rows.len() - limit);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
