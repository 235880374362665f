use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use crate::encoder::EscapeRules;
use crate::pipeline::{DEFAULT_CONFIG_NAME, EmbedConfig};

pub mod embed;
pub mod execute;
pub mod init;
pub mod inspect;

/// Input selection shared by commands that read the tables
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Configuration file (defaults to ./yarnembed.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// String table CSV (id, text)
    #[arg(long)]
    pub strings: Option<PathBuf>,

    /// Line metadata CSV (id, node, lineNumber, tags); enables the metadata table
    #[arg(long)]
    pub metadata: Option<PathBuf>,

    /// Compiled program file
    #[arg(long, conflicts_with = "no_program")]
    pub program: Option<PathBuf>,

    /// Skip the program table
    #[arg(long)]
    pub no_program: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit declarations for the string table, line metadata and program
    Embed {
        #[command(flatten)]
        inputs: InputArgs,

        /// Escaping applied to ids and text: minimal (backslash, quote) or
        /// extended (also newlines, tabs, control characters)
        #[arg(long)]
        escape: Option<EscapeRules>,

        /// Write the string table and program data to this file
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Write the metadata table to this file
        #[arg(long)]
        metadata_out: Option<PathBuf>,

        /// Do not print declarations to stdout
        #[arg(long)]
        no_stdout: bool,

        /// Suppress step output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Report row counts, duplicate ids and unmatched metadata without emitting
    Inspect {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Write a default configuration file
    InitConfig {
        /// Destination (defaults to ./yarnembed.toml)
        path: Option<PathBuf>,

        /// Enable the metadata table in the generated file
        #[arg(long)]
        with_metadata: bool,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

impl InputArgs {
    /// Build the run configuration: the config file (explicit, or
    /// `./yarnembed.toml` if present, else defaults) with flags applied on top.
    pub fn resolve(&self) -> anyhow::Result<EmbedConfig> {
        let mut config = match &self.config {
            Some(path) => EmbedConfig::load(path)?,
            None if Path::new(DEFAULT_CONFIG_NAME).is_file() => {
                tracing::info!("Using {}", DEFAULT_CONFIG_NAME);
                EmbedConfig::load(DEFAULT_CONFIG_NAME)?
            }
            None => EmbedConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut EmbedConfig) {
        if let Some(strings) = &self.strings {
            config.inputs.strings.clone_from(strings);
        }
        if let Some(metadata) = &self.metadata {
            config.inputs.metadata = Some(metadata.clone());
        }
        if let Some(program) = &self.program {
            config.inputs.program = Some(program.clone());
        }
        if self.no_program {
            config.inputs.program = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let mut config = EmbedConfig::default();
        let args = InputArgs {
            strings: Some("lines.csv".into()),
            metadata: Some("meta.csv".into()),
            no_program: true,
            ..InputArgs::default()
        };
        args.apply(&mut config);

        assert_eq!(config.inputs.strings, PathBuf::from("lines.csv"));
        assert_eq!(config.inputs.metadata, Some(PathBuf::from("meta.csv")));
        assert_eq!(config.inputs.program, None);
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "escape = \"extended\"\n").unwrap();

        let args = InputArgs {
            config: Some(path),
            program: Some("/abs/prog.yarnc".into()),
            ..InputArgs::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.escape, EscapeRules::Extended);
        assert_eq!(config.inputs.program, Some(PathBuf::from("/abs/prog.yarnc")));
        assert_eq!(config.inputs.strings, dir.path().join("Output.csv"));
    }
}
