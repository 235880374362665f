//! Header-keyed CSV records
//!
//! A CSV file with a header row is read as an ordered sequence of
//! [`Record`]s, each mapping column name to field text. Row order is
//! preserved and each record remembers the line it started on so layout
//! errors can point at the file position.

mod reader;

pub use reader::{RecordSource, Records};

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// One data row of a CSV file, keyed by the header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    line: u64,
    fields: IndexMap<String, String>,
}

impl Record {
    /// Build a record from `(column, value)` pairs.
    pub fn new<I, K, V>(line: u64, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            line,
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 1-based line number the row starts on (the header is line 1)
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Look up a field by column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Look up a field that must be present.
    ///
    /// # Errors
    /// Returns [`Error::MissingField`] if the record has no such column.
    pub fn field(&self, column: &str) -> Result<&str> {
        self.get(column).ok_or_else(|| Error::MissingField {
            line: self.line,
            column: column.to_string(),
        })
    }

    /// All fields in header order
    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
