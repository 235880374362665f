//! Command execution implementations

use super::Commands;
use super::{embed, init, inspect};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Embed {
                inputs,
                escape,
                out,
                metadata_out,
                no_stdout,
                quiet,
            } => embed::execute(
                inputs,
                *escape,
                out.as_deref(),
                metadata_out.as_deref(),
                *no_stdout,
                *quiet,
            ),
            Commands::Inspect { inputs } => inspect::execute(inputs),
            Commands::InitConfig {
                path,
                with_metadata,
                force,
            } => init::execute(path.as_deref(), *with_metadata, *force),
        }
    }
}
