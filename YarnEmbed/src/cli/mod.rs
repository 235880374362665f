//! YarnEmbed CLI - Command-line interface for embedding compiled Yarn data

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "yarnembed")]
#[command(version, about = "YarnEmbed: embed Yarn string tables and programs as source literals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the YarnEmbed CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging; stdout carries the declarations
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
