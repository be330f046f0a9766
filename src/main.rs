//! sortbench-report CLI
//!
//! Command-line interface for rendering sorting benchmark charts.

use anyhow::Result;
use clap::Parser;
use sortbench_report::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Generate the report
    cli.run()?;

    Ok(())
}
