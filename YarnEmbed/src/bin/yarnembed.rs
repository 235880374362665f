//! `yarnembed` command-line entry point

fn main() -> anyhow::Result<()> {
    yarnembed::cli::run_cli()
}
