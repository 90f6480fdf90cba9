use bom_model::{CellValue, Row, Table};

#[test]
fn row_positions_are_one_based() {
    let row: Row = ["ABC123", "", "Acme"].into_iter().collect();
    assert_eq!(row.text(1), "ABC123");
    assert_eq!(row.cell(2), Some(&CellValue::Empty));
    assert_eq!(row.text(3), "Acme");
    assert_eq!(row.cell(0), None);
    assert_eq!(row.text(9), "");
}

#[test]
fn set_cell_pads_short_rows() {
    let mut row: Row = ["ABC123"].into_iter().collect();
    row.set_cell(3, CellValue::from("12.50"));
    assert_eq!(
        row.cells,
        vec![
            CellValue::Text("ABC123".to_string()),
            CellValue::Empty,
            CellValue::Text("12.50".to_string()),
        ]
    );

    row.set_cell(0, CellValue::from("ignored"));
    assert_eq!(row.cells.len(), 3);
}

#[test]
fn whitespace_cells_are_blank_but_preserved() {
    let cell = CellValue::from("  ");
    assert!(cell.is_blank());
    assert_eq!(cell.as_str(), "  ");
    assert!(CellValue::Empty.is_blank());
    assert!(!CellValue::from(" X ").is_blank());
}

#[test]
fn header_cells_and_column_count() {
    let mut table = Table::new(vec!["PartNumber".to_string(), "Price".to_string()]);
    table.push_row(["A", "1", "extra"].into_iter().collect());
    let headers: Vec<(&str, usize)> = table.header_cells().collect();
    assert_eq!(headers, vec![("PartNumber", 1), ("Price", 2)]);
    assert_eq!(table.column_count(), 3);
}
