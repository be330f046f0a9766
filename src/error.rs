//! Error types for sortbench-report

use std::path::PathBuf;
use thiserror::Error;

/// Report generation error
#[derive(Error, Debug)]
pub enum ReportError {
    /// The results file could not be read or parsed
    #[error("failed to load benchmark results from {}: {source}", .path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A chart image could not be rendered or written
    #[error("failed to render chart {}: {message}", .path.display())]
    Render { path: PathBuf, message: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ReportError>;
