//! The embed pipeline
//!
//! One run reads the configured inputs, encodes every table in memory and
//! only then emits. A failure at any step returns before anything is
//! printed or written.
//!
//! ```no_run
//! use yarnembed::pipeline::{EmbedConfig, run};
//!
//! let mut config = EmbedConfig::default();
//! config.inputs.metadata = Some("Output-metadata.csv".into());
//! let summary = run(&config)?;
//! eprintln!("{} lines embedded", summary.strings);
//! # Ok::<(), yarnembed::Error>(())
//! ```

pub mod checks;
pub mod config;
mod types;

pub use config::{
    DEFAULT_CONFIG_NAME, DEFAULT_METADATA_PATH, DEFAULT_PROGRAM_PATH, DEFAULT_STRINGS_PATH,
    EmbedConfig, Inputs,
};
pub use types::{EmbedPhase, EmbedProgress, EmbedProgressCallback, EmbedSummary};

use std::io::Write;

use crate::emitter::{Declaration, Emitter, TableKind};
use crate::encoder::{hex_tokens, metadata_entry, string_entry};
use crate::error::Result;
use crate::formats::{read_metadata_table, read_program, read_string_table};

/// Read and encode every enabled table.
///
/// # Errors
/// Returns the first read or encode failure, or [`Error::InvalidConfig`]
/// if the output plan names a disabled table.
///
/// [`Error::InvalidConfig`]: crate::Error::InvalidConfig
pub fn build_declarations(config: &EmbedConfig) -> Result<Vec<Declaration>> {
    Ok(encode_tables(config, &|_| {})?.0)
}

/// Run the pipeline, printing to stdout.
///
/// # Errors
/// See [`build_declarations`]; also fails if writing output fails.
pub fn run(config: &EmbedConfig) -> Result<EmbedSummary> {
    run_with_progress(config, &mut Emitter::stdout(), &|_| {})
}

/// Run the pipeline with a custom primary writer and progress callback.
///
/// # Errors
/// See [`run`].
pub fn run_with_progress<W: Write>(
    config: &EmbedConfig,
    emitter: &mut Emitter<W>,
    progress: EmbedProgressCallback,
) -> Result<EmbedSummary> {
    let (declarations, mut summary) = encode_tables(config, progress)?;

    let total = config.tables().len() + 1;
    progress(&EmbedProgress::new(EmbedPhase::Emitting, total, total));
    summary.report = emitter.emit(&declarations, &config.output)?;

    tracing::info!(
        "Embedded {} line(s), {} metadata record(s), {} program byte(s)",
        summary.strings,
        summary.metadata.unwrap_or(0),
        summary.program_bytes.unwrap_or(0)
    );
    Ok(summary)
}

fn encode_tables(
    config: &EmbedConfig,
    progress: EmbedProgressCallback,
) -> Result<(Vec<Declaration>, EmbedSummary)> {
    config.validate()?;

    let total = config.tables().len() + 1;
    let rules = config.escape;
    let mut step = 0;
    let mut declarations = Vec::with_capacity(3);
    let mut summary = EmbedSummary::default();

    // String table
    step += 1;
    progress(&EmbedProgress::with_file(
        EmbedPhase::ReadingStrings,
        step,
        total,
        &config.inputs.strings,
    ));
    let lines = read_string_table(&config.inputs.strings)?;
    tracing::debug!("Read {} line(s) from {}", lines.len(), config.inputs.strings.display());

    summary.duplicate_ids = checks::duplicate_ids(lines.iter().map(|l| l.id.as_str()));
    for id in &summary.duplicate_ids {
        tracing::warn!("Duplicate line id in string table: {}", id);
    }
    summary.strings = lines.len();
    declarations.push(Declaration::new(
        TableKind::Strings,
        config.templates.strings.clone(),
        lines.iter().map(|line| string_entry(line, rules)).collect(),
    ));

    // Metadata table
    if let Some(path) = &config.inputs.metadata {
        step += 1;
        progress(&EmbedProgress::with_file(
            EmbedPhase::ReadingMetadata,
            step,
            total,
            path,
        ));
        let metadata = read_metadata_table(path)?;
        tracing::debug!("Read {} metadata record(s) from {}", metadata.len(), path.display());

        for id in checks::duplicate_ids(metadata.iter().map(|m| m.id.as_str())) {
            tracing::warn!("Duplicate line id in metadata table: {}", id);
        }
        summary.unmatched_metadata = checks::unmatched_ids(
            lines.iter().map(|l| l.id.as_str()),
            metadata.iter().map(|m| m.id.as_str()),
        );
        for id in &summary.unmatched_metadata {
            tracing::warn!("Metadata for unknown line id: {}", id);
        }

        let entries = metadata
            .iter()
            .map(|meta| metadata_entry(meta, rules))
            .collect::<Result<Vec<_>>>()?;
        summary.metadata = Some(entries.len());
        declarations.push(Declaration::new(
            TableKind::Metadata,
            config.templates.metadata.clone(),
            entries,
        ));
    }

    // Program data
    if let Some(path) = &config.inputs.program {
        step += 1;
        progress(&EmbedProgress::with_file(
            EmbedPhase::ReadingProgram,
            step,
            total,
            path,
        ));
        let bytes = read_program(path)?;
        tracing::debug!("Read {} byte(s) from {}", bytes.len(), path.display());

        summary.program_bytes = Some(bytes.len());
        declarations.push(Declaration::new(
            TableKind::Program,
            config.templates.program.clone(),
            hex_tokens(&bytes),
        ));
    }

    Ok((declarations, summary))
}
