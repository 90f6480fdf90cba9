pub mod discovery;
pub mod error;
pub mod table;

pub use discovery::{ENRICHED_SUFFIX, enriched_output_path, list_table_files};
pub use error::{IngestError, Result};
pub use table::{TableFormat, read_table, read_table_from_reader};
