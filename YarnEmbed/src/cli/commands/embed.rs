//! Embed command

use std::path::Path;
use std::time::Instant;

use super::InputArgs;
use crate::cli::progress::{print_done, print_embed_progress};
use crate::emitter::{Emitter, OutputFile, TableKind};
use crate::encoder::EscapeRules;
use crate::pipeline::{DEFAULT_METADATA_PATH, EmbedConfig, run_with_progress};

/// Run the pipeline with CLI overrides.
pub fn execute(
    inputs: &InputArgs,
    escape: Option<EscapeRules>,
    out: Option<&Path>,
    metadata_out: Option<&Path>,
    no_stdout: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = inputs.resolve()?;
    if let Some(rules) = escape {
        config.escape = rules;
    }
    if no_stdout {
        config.output.stdout = false;
    }
    apply_output_flags(&mut config, out, metadata_out);

    let mut emitter = Emitter::stdout();
    let summary = if quiet {
        run_with_progress(&config, &mut emitter, &|_| {})?
    } else {
        run_with_progress(&config, &mut emitter, &print_embed_progress)?
    };

    if !quiet {
        for path in &summary.report.files_written {
            eprintln!("  Wrote {}", path.display());
        }
        if !summary.duplicate_ids.is_empty() {
            eprintln!("  Duplicate ids: {}", summary.duplicate_ids.len());
        }
        if !summary.unmatched_metadata.is_empty() {
            eprintln!(
                "  Metadata without a string entry: {}",
                summary.unmatched_metadata.len()
            );
        }
        print_done(start.elapsed());
    }

    Ok(())
}

/// Turn `--out`/`--metadata-out` into output files.
///
/// `--metadata-out` enables the metadata table if no metadata input was
/// configured, reading the conventional file beside the string table. `--out`
/// receives every other enabled table, including metadata when it has no file
/// of its own.
fn apply_output_flags(config: &mut EmbedConfig, out: Option<&Path>, metadata_out: Option<&Path>) {
    if let Some(path) = metadata_out {
        if config.inputs.metadata.is_none() {
            config.inputs.metadata =
                Some(config.inputs.strings.with_file_name(DEFAULT_METADATA_PATH));
        }
        config
            .output
            .files
            .push(OutputFile::new(path, [TableKind::Metadata]));
    }

    if let Some(path) = out {
        let tables: Vec<TableKind> = config
            .tables()
            .into_iter()
            .filter(|kind| metadata_out.is_none() || *kind != TableKind::Metadata)
            .collect();
        config.output.files.push(OutputFile::new(path, tables));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_out_gets_everything_without_metadata_out() {
        let mut config = EmbedConfig::default();
        config.inputs.metadata = Some("m.csv".into());
        apply_output_flags(&mut config, Some(Path::new("all.ts")), None);

        assert_eq!(
            config.output.files,
            vec![OutputFile::new(
                "all.ts",
                [TableKind::Strings, TableKind::Metadata, TableKind::Program]
            )]
        );
    }

    #[test]
    fn test_metadata_out_splits_files() {
        let mut config = EmbedConfig::default();
        apply_output_flags(
            &mut config,
            Some(Path::new("data.ts")),
            Some(Path::new("meta.ts")),
        );

        assert_eq!(
            config.inputs.metadata,
            Some(PathBuf::from(DEFAULT_METADATA_PATH))
        );
        assert_eq!(
            config.output.files,
            vec![
                OutputFile::new("meta.ts", [TableKind::Metadata]),
                OutputFile::new("data.ts", [TableKind::Strings, TableKind::Program]),
            ]
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_metadata_fallback_sits_beside_strings() {
        let mut config = EmbedConfig::default();
        config.inputs.strings = PathBuf::from("build/dialogue/Output.csv");
        apply_output_flags(&mut config, None, Some(Path::new("meta.ts")));

        assert_eq!(
            config.inputs.metadata,
            Some(PathBuf::from("build/dialogue").join(DEFAULT_METADATA_PATH))
        );
    }

    #[test]
    fn test_same_path_for_both_outputs_is_rejected() {
        let mut config = EmbedConfig::default();
        apply_output_flags(&mut config, Some(Path::new("x.ts")), Some(Path::new("x.ts")));
        assert!(config.validate().is_err());
    }
}
