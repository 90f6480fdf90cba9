use std::fs;
use std::path::Path;

use bom_ingest::{
    IngestError, TableFormat, enriched_output_path, list_table_files, read_table,
    read_table_from_reader,
};
use bom_model::CellValue;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_header_and_rows_verbatim() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(
        dir.path(),
        "bom.csv",
        "\u{feff}PartNumber,Manufacturer,Notes\n ABC123 ,,keep me\nXYZ999\n",
    );
    let table = read_table(&path).expect("read table");

    assert_eq!(table.headers, vec!["PartNumber", "Manufacturer", "Notes"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].text(1), " ABC123 ");
    assert_eq!(table.rows[0].cell(2), Some(&CellValue::Empty));
    assert_eq!(table.rows[0].text(3), "keep me");
    assert_eq!(table.rows[1].cells.len(), 3);
}

#[test]
fn reads_tab_separated_tables() {
    let table = read_table_from_reader(
        "PartNumber\tStock\nR1\t\n".as_bytes(),
        TableFormat::Tsv,
        Path::new("inline.tsv"),
    )
    .expect("read table");
    assert_eq!(table.headers, vec!["PartNumber", "Stock"]);
    assert_eq!(table.rows[0].text(1), "R1");
}

#[test]
fn rejects_unknown_extensions_and_empty_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let xlsx = write(dir.path(), "bom.xlsx", "PartNumber\n");
    assert!(matches!(
        read_table(&xlsx),
        Err(IngestError::UnsupportedExtension { .. })
    ));

    let empty = write(dir.path(), "empty.csv", "");
    assert!(matches!(read_table(&empty), Err(IngestError::Empty { .. })));
}

#[test]
fn lists_inputs_and_skips_previous_outputs() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "b.csv", "PartNumber\n");
    write(dir.path(), "a.TSV", "PartNumber\n");
    write(dir.path(), "a_enriched.csv", "PartNumber\n");
    write(dir.path(), "notes.txt", "hello");
    fs::create_dir(dir.path().join("nested.csv")).expect("create dir");

    let files = list_table_files(dir.path()).expect("list files");
    let names: Vec<String> = files
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.TSV", "b.csv"]);

    assert!(matches!(
        list_table_files(&dir.path().join("missing")),
        Err(IngestError::DirectoryNotFound { .. })
    ));
}

#[test]
fn output_path_sits_next_to_input() {
    assert_eq!(
        enriched_output_path(Path::new("/data/bom.csv")),
        Path::new("/data/bom_enriched.csv")
    );
    assert_eq!(
        enriched_output_path(Path::new("parts.tsv")),
        Path::new("parts_enriched.tsv")
    );
}
