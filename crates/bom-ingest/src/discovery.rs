//! Input file discovery for batch runs.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};
use crate::table::TableFormat;

/// Lists every `.csv` and `.tsv` file directly inside `dir`, sorted by file
/// name. Files produced by an earlier run (`*_enriched.*`) are left out.
pub fn list_table_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() || TableFormat::from_path(&path).is_err() {
            continue;
        }
        let already_enriched = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.ends_with(ENRICHED_SUFFIX));
        if !already_enriched {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Stem suffix marking enriched output files.
pub const ENRICHED_SUFFIX: &str = "_enriched";

/// Default output path: `<dir>/<stem>_enriched.<ext>`.
pub fn enriched_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("table");
    let extension = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("csv");
    input.with_file_name(format!("{stem}{ENRICHED_SUFFIX}.{extension}"))
}
