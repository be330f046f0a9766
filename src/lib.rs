//! sortbench-report - comparison charts for sorting benchmark results
//!
//! This library turns the CSV produced by the sorting benchmark driver into
//! three line charts: merge sort against the reference hybrid configuration,
//! the hybrid sort across its threshold sweep, and the hybrid sort across
//! input distributions.
//!
//! # Architecture
//!
//! - **Dataset**: CSV loading and equality filtering over measurements
//! - **Charts**: series/chart types and the line chart renderer
//! - **Report**: the three chart definitions and their generation

pub mod charts;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use charts::{ChartSpec, LinePlotter, Series};
pub use dataset::{Dataset, Measurement, MeasurementFilter};
pub use error::{ReportError, Result};
pub use report::{GeneratedReport, ReportGenerator};
