//! CSV record reading
//!
//! [`RecordSource`] validates the file and header once; every call to
//! [`RecordSource::records`] reopens the file and yields rows lazily.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ByteRecordsIntoIter, ReaderBuilder};

use super::Record;
use crate::error::{Error, Result};

const UTF8_BOM: char = '\u{feff}';

/// A header-ful CSV file that can be iterated any number of times
#[derive(Debug, Clone)]
pub struct RecordSource {
    path: PathBuf,
    headers: Vec<String>,
}

impl RecordSource {
    /// Open a CSV file and read its header row.
    ///
    /// A file holding only a header row is valid and yields no records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the path does not exist.
    /// Returns [`Error::MalformedCsv`] or [`Error::InvalidUtf8`] if the header
    /// row cannot be parsed, and [`Error::DuplicateColumn`] if it names a
    /// column twice.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(open_input(&path)?);

        let raw = reader
            .byte_headers()
            .map_err(|e| csv_error(&path, e))?
            .clone();
        let mut headers = decode_fields(&path, &raw, 1)?;
        if let Some(stripped) = headers
            .first()
            .and_then(|first| first.strip_prefix(UTF8_BOM))
            .map(str::to_string)
        {
            headers[0] = stripped;
        }
        if let Some(column) = headers
            .iter()
            .enumerate()
            .find_map(|(i, h)| headers[..i].contains(h).then_some(h))
        {
            return Err(Error::DuplicateColumn {
                path,
                column: column.clone(),
            });
        }

        tracing::debug!("Opened {} with columns {:?}", path.display(), headers);
        Ok(Self { path, headers })
    }

    /// Fail unless every named column is present in the header.
    ///
    /// # Errors
    /// Returns [`Error::MissingColumn`] naming the first absent column.
    pub fn require_columns(&self, columns: &[&str]) -> Result<()> {
        match columns
            .iter()
            .find(|column| !self.headers.iter().any(|h| h == *column))
        {
            Some(column) => Err(Error::MissingColumn {
                path: self.path.clone(),
                column: (*column).to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Column names in header order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Start a fresh pass over the data rows.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] if the file vanished since [`open`](Self::open).
    pub fn records(&self) -> Result<Records<'_>> {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(open_input(&self.path)?);

        Ok(Records {
            source: self,
            rows: reader.into_byte_records(),
        })
    }

    /// Read every row into memory, stopping at the first error.
    pub fn read_all(&self) -> Result<Vec<Record>> {
        self.records()?.collect()
    }
}

/// Lazy iterator over the data rows of a [`RecordSource`]
pub struct Records<'a> {
    source: &'a RecordSource,
    rows: ByteRecordsIntoIter<File>,
}

impl Iterator for Records<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(
            row.map_err(|e| csv_error(&self.source.path, e))
                .and_then(|raw| self.to_record(&raw)),
        )
    }
}

impl Records<'_> {
    fn to_record(&self, raw: &ByteRecord) -> Result<Record> {
        let line = raw.position().map_or(0, csv::Position::line);
        let expected = self.source.headers.len();
        if raw.len() != expected {
            return Err(Error::RowLengthMismatch {
                path: self.source.path.clone(),
                line,
                expected,
                found: raw.len(),
            });
        }

        let values = decode_fields(&self.source.path, raw, line)?;
        Ok(Record::new(
            line,
            self.source.headers.iter().cloned().zip(values),
        ))
    }
}

fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}

fn decode_fields(path: &Path, raw: &ByteRecord, line: u64) -> Result<Vec<String>> {
    raw.iter()
        .map(|field| {
            std::str::from_utf8(field)
                .map(str::to_string)
                .map_err(|_| Error::InvalidUtf8 {
                    path: path.to_path_buf(),
                    line,
                })
        })
        .collect()
}

fn csv_error(path: &Path, err: csv::Error) -> Error {
    if err.is_io_error() {
        if let csv::ErrorKind::Io(io) = err.into_kind() {
            return Error::Io(io);
        }
        return Error::MalformedCsv {
            path: path.to_path_buf(),
            message: "unknown IO failure".to_string(),
        };
    }
    Error::MalformedCsv {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reads_rows_in_order() {
        let file = csv_file(b"id,text\nL1,Hello\nL2,World\n");
        let source = RecordSource::open(file.path()).unwrap();
        assert_eq!(source.headers(), ["id", "text"]);

        let records = source.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("id"), Some("L1"));
        assert_eq!(records[1].get("text"), Some("World"));
        assert_eq!(records[0].line(), 2);
        assert_eq!(records[1].line(), 3);
    }

    #[test]
    fn test_records_are_restartable() {
        let file = csv_file(b"id,text\nL1,a\nL2,b\n");
        let source = RecordSource::open(file.path()).unwrap();

        let first: Vec<_> = source.records().unwrap().take(1).collect();
        assert_eq!(first.len(), 1);

        let again = source.read_all().unwrap();
        assert_eq!(again.len(), 2);
        assert_eq!(again[0].get("id"), Some("L1"));
    }

    #[test]
    fn test_quoted_fields() {
        let file = csv_file(b"id,text\nL1,\"He said \"\"hi\"\", then left\nagain\"\n");
        let records = RecordSource::open(file.path()).unwrap().read_all().unwrap();
        assert_eq!(records[0].get("text"), Some("He said \"hi\", then left\nagain"));
    }

    #[test]
    fn test_header_only_file() {
        let file = csv_file(b"id,text\n");
        let source = RecordSource::open(file.path()).unwrap();
        source.require_columns(&["id", "text"]).unwrap();
        assert!(source.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_strips_bom_from_header() {
        let file = csv_file(b"\xef\xbb\xbfid,text\nL1,a\n");
        let source = RecordSource::open(file.path()).unwrap();
        source.require_columns(&["id"]).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RecordSource::open(dir.path().join("Output.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_missing_column() {
        let file = csv_file(b"id,body\nL1,a\n");
        let source = RecordSource::open(file.path()).unwrap();
        let err = source.require_columns(&["id", "text"]).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { ref column, .. } if column == "text"));
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_repeated_header_rejected() {
        let file = csv_file(b"id,text,text\nL1,first,second\n");
        let err = RecordSource::open(file.path()).unwrap_err();
        assert!(matches!(err, Error::DuplicateColumn { ref column, .. } if column == "text"));
        assert_eq!(err.kind(), ErrorKind::MalformedInput);

        // A BOM does not hide the repeat
        let file = csv_file(b"\xef\xbb\xbfid,text,id\nL1,a,b\n");
        let err = RecordSource::open(file.path()).unwrap_err();
        assert!(matches!(err, Error::DuplicateColumn { ref column, .. } if column == "id"));
    }

    #[test]
    fn test_row_length_mismatch() {
        let file = csv_file(b"id,text\nL1,a\nL2,b,extra\n");
        let source = RecordSource::open(file.path()).unwrap();
        let mut rows = source.records().unwrap();

        assert!(rows.next().unwrap().is_ok());
        let err = rows.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            Error::RowLengthMismatch { line: 3, expected: 2, found: 3, .. }
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        let file = csv_file(b"id,text\nL1,\xff\xfe\n");
        let source = RecordSource::open(file.path()).unwrap();
        let err = source.read_all().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EncodingFailure);
    }
}
