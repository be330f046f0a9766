//! CLI argument parsing and command handling

use crate::dataset::Dataset;
use crate::report::ReportGenerator;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Render comparison charts from sorting benchmark results
#[derive(Parser, Debug)]
#[command(name = "sortbench-report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the benchmark results CSV
    #[arg(short, long, default_value = "sorting_results.csv")]
    pub input: PathBuf,

    /// Directory the chart images are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Generate the report from CLI arguments
    pub fn run(&self) -> Result<()> {
        tracing::info!("loading benchmark results from {}", self.input.display());

        let dataset = Dataset::from_csv(&self.input)
            .with_context(|| format!("cannot build report without {}", self.input.display()))?;

        tracing::info!("loaded {} measurements", dataset.len());

        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "failed to create output directory: {}",
                self.output_dir.display()
            )
        })?;

        let report = ReportGenerator::new(dataset, &self.output_dir).generate();

        for path in &report.written {
            println!("✓ chart written to: {}", path.display());
        }

        if !report.failures.is_empty() {
            anyhow::bail!(
                "{} of {} charts failed to render",
                report.failures.len(),
                report.failures.len() + report.written.len()
            );
        }

        Ok(())
    }
}
