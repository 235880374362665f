//! Typed line rows
//!
//! The Yarn Spinner compiler writes two CSV files next to a compiled
//! program: the string table (`id,text,...`) and the line metadata table
//! (`id,node,lineNumber,tags`). Extra columns are allowed and ignored.

use std::path::Path;

use serde::Serialize;

use super::records::{Record, RecordSource};
use crate::error::Result;

/// Columns the string table must provide
pub const STRING_COLUMNS: [&str; 2] = ["id", "text"];

/// Columns the metadata table must provide
pub const METADATA_COLUMNS: [&str; 4] = ["id", "node", "lineNumber", "tags"];

/// A single localized line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedLine {
    /// Line identifier (e.g. `line:intro_01`)
    pub id: String,
    /// Localized text
    pub text: String,
}

impl LocalizedLine {
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            id: record.field("id")?.to_string(),
            text: record.field("text")?.to_string(),
        })
    }
}

/// Provenance of a line: the node it belongs to, its source line and tags
///
/// Field order matches the runtime's `MetadataEntry` shape and is kept when
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMetadata {
    pub id: String,
    pub node: String,
    #[serde(rename = "lineNumber")]
    pub line_number: String,
    pub tags: Vec<String>,
}

impl LineMetadata {
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            id: record.field("id")?.to_string(),
            node: record.field("node")?.to_string(),
            line_number: record.field("lineNumber")?.to_string(),
            tags: split_tags(record.field("tags")?),
        })
    }
}

/// Split a raw tag field on single spaces.
///
/// No normalization is applied: an empty field yields `[""]` and runs of
/// spaces yield empty tokens.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(' ').map(str::to_string).collect()
}

/// Read every row of a string table CSV.
///
/// # Errors
/// Returns an error if the file is missing, lacks `id`/`text`, or has a
/// malformed row.
pub fn read_string_table<P: AsRef<Path>>(path: P) -> Result<Vec<LocalizedLine>> {
    let source = RecordSource::open(path)?;
    source.require_columns(&STRING_COLUMNS)?;
    source
        .records()?
        .map(|record| LocalizedLine::from_record(&record?))
        .collect()
}

/// Read every row of a line metadata CSV.
///
/// # Errors
/// Returns an error if the file is missing, lacks one of the metadata
/// columns, or has a malformed row.
pub fn read_metadata_table<P: AsRef<Path>>(path: P) -> Result<Vec<LineMetadata>> {
    let source = RecordSource::open(path)?;
    source.require_columns(&METADATA_COLUMNS)?;
    source
        .records()?
        .map(|record| LineMetadata::from_record(&record?))
        .collect()
}
