//! Input formats
//!
//! - CSV string and metadata tables written alongside a compiled program
//! - The compiled program itself, read as opaque bytes

pub mod lines;
pub mod records;

pub use lines::{
    LineMetadata, LocalizedLine, METADATA_COLUMNS, STRING_COLUMNS, read_metadata_table,
    read_string_table, split_tags,
};
pub use records::{Record, RecordSource, Records};

use std::path::Path;

use crate::error::{Error, Result};

/// Read a compiled program as raw bytes.
///
/// The contents are not inspected.
///
/// # Errors
/// Returns [`Error::FileNotFound`] if the file does not exist.
pub fn read_program<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}
