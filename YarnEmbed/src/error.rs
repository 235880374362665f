//! Error types for `YarnEmbed`

use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of an [`Error`].
///
/// Every failure is fatal to a run; the kind only tells the caller what
/// went wrong, not how to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An input file does not exist.
    NotFound,
    /// An input or configuration file has an unexpected layout.
    MalformedInput,
    /// Data could not be represented as text.
    EncodingFailure,
    /// Any other IO failure while reading or writing.
    Io,
}

/// The error type for `YarnEmbed` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An input file could not be found.
    #[error("input file not found: {path}")]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },

    // ==================== CSV Layout Errors ====================
    /// A required column is absent from the header row.
    #[error("{path}: missing required column '{column}'")]
    MissingColumn {
        /// The CSV file.
        path: PathBuf,
        /// The column name that was expected.
        column: String,
    },

    /// The header row names the same column more than once.
    #[error("{path}: duplicate column '{column}' in header")]
    DuplicateColumn {
        /// The CSV file.
        path: PathBuf,
        /// The repeated column name.
        column: String,
    },

    /// A data row has a different number of fields than the header.
    #[error("{path}:{line}: expected {expected} fields, found {found}")]
    RowLengthMismatch {
        /// The CSV file.
        path: PathBuf,
        /// 1-based line number of the offending row.
        line: u64,
        /// Number of header columns.
        expected: usize,
        /// Number of fields in the row.
        found: usize,
    },

    /// The CSV parser rejected the file.
    #[error("{path}: malformed CSV: {message}")]
    MalformedCsv {
        /// The CSV file.
        path: PathBuf,
        /// The parser's message.
        message: String,
    },

    /// A record lookup named a column the record does not carry.
    #[error("line {line}: no field '{column}'")]
    MissingField {
        /// 1-based line number of the record.
        line: u64,
        /// The requested column.
        column: String,
    },

    // ==================== Encoding Errors ====================
    /// A CSV row contains bytes that are not valid UTF-8.
    #[error("{path}:{line}: invalid UTF-8 in field data")]
    InvalidUtf8 {
        /// The CSV file.
        path: PathBuf,
        /// 1-based line number of the offending row.
        line: u64,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ==================== Configuration Errors ====================
    /// Configuration file could not be parsed.
    #[error("config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("config serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// Configuration is well-formed but inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileNotFound { .. } => ErrorKind::NotFound,
            Error::MissingColumn { .. }
            | Error::DuplicateColumn { .. }
            | Error::RowLengthMismatch { .. }
            | Error::MalformedCsv { .. }
            | Error::MissingField { .. }
            | Error::TomlError(_)
            | Error::InvalidConfig(_) => ErrorKind::MalformedInput,
            Error::InvalidUtf8 { .. } | Error::JsonError(_) | Error::TomlSerializeError(_) => {
                ErrorKind::EncodingFailure
            }
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

/// A specialized Result type for `YarnEmbed` operations.
pub type Result<T> = std::result::Result<T, Error>;
