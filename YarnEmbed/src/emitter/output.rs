//! Output destinations
//!
//! Declarations always go to the primary writer (stdout for the CLI) unless
//! disabled, and optionally to files. Files are overwritten; multiple
//! declarations in one file are separated by a blank line.
//!
//! Every file is written to a temporary sibling first. Targets are replaced
//! and the primary writer is used only once all of them were staged.

use std::fs::File;
use std::io::{BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::{Declaration, TableKind};
use crate::error::{Error, Result};

/// A file that receives some of the tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    pub path: PathBuf,
    /// Tables to write, in this order
    pub tables: Vec<TableKind>,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, tables: impl Into<Vec<TableKind>>) -> Self {
        Self {
            path: path.into(),
            tables: tables.into(),
        }
    }
}

/// Where declarations are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPlan {
    /// Print every declaration to the primary writer
    pub stdout: bool,
    pub files: Vec<OutputFile>,
}

impl Default for OutputPlan {
    fn default() -> Self {
        Self {
            stdout: true,
            files: Vec::new(),
        }
    }
}

impl OutputPlan {
    /// Check that no two files share a path, and that every file names at
    /// least one table, names each table at most once, and only names tables
    /// that were produced.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] describing the first problem.
    pub fn validate(&self, available: &[TableKind]) -> Result<()> {
        for (n, file) in self.files.iter().enumerate() {
            if self.files[..n].iter().any(|f| f.path == file.path) {
                return Err(Error::InvalidConfig(format!(
                    "output file {} is listed more than once",
                    file.path.display()
                )));
            }
            if file.tables.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "output file {} lists no tables",
                    file.path.display()
                )));
            }
            for (i, kind) in file.tables.iter().enumerate() {
                if file.tables[..i].contains(kind) {
                    return Err(Error::InvalidConfig(format!(
                        "output file {} lists the {kind} table twice",
                        file.path.display()
                    )));
                }
                if !available.contains(kind) {
                    return Err(Error::InvalidConfig(format!(
                        "output file {} wants the {kind} table, which is not enabled",
                        file.path.display()
                    )));
                }
            }
        }
        Ok(())
    }
}

/// What an [`Emitter`] wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitReport {
    /// Declarations written to the primary writer
    pub printed: usize,
    /// Files written, in plan order
    pub files_written: Vec<PathBuf>,
}

/// Writes rendered declarations to the primary writer and plan files
pub struct Emitter<W: Write> {
    out: W,
}

impl Emitter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `declarations` according to `plan`.
    ///
    /// The plan is validated and every file staged before anything is
    /// written, so a bad plan or an unwritable target leaves no output.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] for an inconsistent plan, or
    /// [`Error::Io`] if writing fails.
    pub fn emit(&mut self, declarations: &[Declaration], plan: &OutputPlan) -> Result<EmitReport> {
        let available: Vec<TableKind> = declarations.iter().map(|d| d.kind).collect();
        plan.validate(&available)?;

        let rendered: Vec<(TableKind, String)> =
            declarations.iter().map(|d| (d.kind, d.render())).collect();
        let mut report = EmitReport::default();

        let mut staged = Vec::with_capacity(plan.files.len());
        for file in &plan.files {
            let texts: Vec<&str> = file
                .tables
                .iter()
                .filter_map(|kind| {
                    rendered
                        .iter()
                        .find(|(k, _)| k == kind)
                        .map(|(_, text)| text.as_str())
                })
                .collect();
            staged.push((file, texts.len(), stage_declarations(&file.path, &texts)?));
        }

        for (file, count, temp) in staged {
            temp.persist(&file.path).map_err(|e| Error::Io(e.error))?;
            tracing::info!("Wrote {} declaration(s) to {}", count, file.path.display());
            report.files_written.push(file.path.clone());
        }

        if plan.stdout {
            for (_, text) in &rendered {
                writeln!(self.out, "{text}")?;
                report.printed += 1;
            }
            self.out.flush()?;
        }

        Ok(report)
    }
}

/// Write the declarations, a blank line between each, to a temporary file
/// in the target's directory.
fn stage_declarations(target: &Path, texts: &[&str]) -> Result<NamedTempFile> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        for (i, text) in texts.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            writeln!(writer, "{text}")?;
        }
        writer.flush()?;
    }

    // Keep the target's mode when replacing it, not the temp file's 0600
    match std::fs::metadata(target) {
        Ok(meta) => temp.as_file().set_permissions(meta.permissions())?,
        Err(_) => set_new_file_permissions(temp.as_file())?,
    }
    Ok(temp)
}

#[cfg(unix)]
fn set_new_file_permissions(file: &File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn set_new_file_permissions(_file: &File) -> std::io::Result<()> {
    Ok(())
}
