//! The three-chart benchmark report

use crate::charts::{ChartSpec, LinePlotter, Series, BROWN, ORANGE, PURPLE};
use crate::dataset::{Dataset, MeasurementFilter};
use crate::error::ReportError;
use plotters::style::colors::{BLUE, GREEN, RED};
use plotters::style::RGBColor;
use std::path::PathBuf;

const X_LABEL: &str = "Array size";
const Y_LABEL: &str = "Time (microseconds)";

/// Hybrid configuration the comparison charts are pinned to
const REFERENCE_THRESHOLD: u32 = 20;

/// Thresholds swept by the benchmark driver, with their fixed colors
const THRESHOLDS: [u32; 5] = [5, 10, 20, 30, 50];
const THRESHOLD_COLORS: [RGBColor; 5] = [GREEN, ORANGE, RED, PURPLE, BROWN];

/// Input distributions compared in the array-type chart: raw category value,
/// display label, fixed color
const ARRAY_TYPES: [(&str, &str, RGBColor); 3] = [
    ("Random", "Random", BLUE),
    ("Reversed", "Reversed", RED),
    ("AlmostSorted", "Almost sorted", GREEN),
];

/// Outcome of one report run
#[derive(Debug, Default)]
pub struct GeneratedReport {
    /// Chart images written successfully
    pub written: Vec<PathBuf>,
    /// Per-chart render failures; one failure does not stop the others
    pub failures: Vec<ReportError>,
}

/// Builds and renders the three comparison charts from a loaded dataset
pub struct ReportGenerator {
    dataset: Dataset,
    output_dir: PathBuf,
}

impl ReportGenerator {
    /// Create a generator over a loaded dataset
    pub fn new(dataset: Dataset, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset,
            output_dir: output_dir.into(),
        }
    }

    /// Render all three charts into the output directory.
    ///
    /// Chart generation is isolated: a render failure is recorded and the
    /// remaining charts are still attempted.
    pub fn generate(&self) -> GeneratedReport {
        let charts = [
            (self.algorithm_comparison(), "sorting_comparison.png"),
            (self.threshold_impact(), "threshold_impact.png"),
            (self.array_types(), "array_types.png"),
        ];

        let mut report = GeneratedReport::default();
        for (spec, file_name) in charts {
            let path = self.output_dir.join(file_name);
            tracing::info!(chart = %spec.title, path = %path.display(), "rendering chart");

            match LinePlotter::render(&spec, &path) {
                Ok(()) => report.written.push(path),
                Err(err) => {
                    tracing::error!("{err}");
                    report.failures.push(err);
                }
            }
        }
        report
    }

    /// Chart 1: merge sort baseline against the reference hybrid
    /// configuration, on random input
    pub fn algorithm_comparison(&self) -> ChartSpec {
        ChartSpec {
            title: "Sorting algorithm comparison".to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            series: vec![
                self.series(
                    MeasurementFilter::new()
                        .with_array_type("Random")
                        .with_algorithm("MergeSort"),
                    "Merge sort".to_string(),
                    BLUE,
                ),
                self.series(
                    MeasurementFilter::new()
                        .with_array_type("Random")
                        .with_algorithm("HybridSort")
                        .with_threshold(REFERENCE_THRESHOLD),
                    format!("Hybrid (threshold = {REFERENCE_THRESHOLD})"),
                    RED,
                ),
            ],
        }
    }

    /// Chart 2: hybrid sort on random input, one series per swept threshold
    pub fn threshold_impact(&self) -> ChartSpec {
        let series = THRESHOLDS
            .iter()
            .zip(THRESHOLD_COLORS)
            .map(|(&threshold, color)| {
                self.series(
                    MeasurementFilter::new()
                        .with_array_type("Random")
                        .with_algorithm("HybridSort")
                        .with_threshold(threshold),
                    format!("Threshold = {threshold}"),
                    color,
                )
            })
            .collect();

        ChartSpec {
            title: "Threshold impact on hybrid sort".to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            series,
        }
    }

    /// Chart 3: the reference hybrid configuration across input distributions
    pub fn array_types(&self) -> ChartSpec {
        let series = ARRAY_TYPES
            .iter()
            .map(|&(array_type, label, color)| {
                self.series(
                    MeasurementFilter::new()
                        .with_array_type(array_type)
                        .with_algorithm("HybridSort")
                        .with_threshold(REFERENCE_THRESHOLD),
                    label.to_string(),
                    color,
                )
            })
            .collect();

        ChartSpec {
            title: "Hybrid sort across array types".to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            series,
        }
    }

    /// One series from the measurements matching `filter`, sorted by size.
    ///
    /// An empty match is a recoverable anomaly: the series is still produced
    /// so the chart renders, with a warning naming the filter.
    fn series(&self, filter: MeasurementFilter, label: String, color: RGBColor) -> Series {
        let mut rows = self.dataset.filter(&filter);
        if rows.is_empty() {
            tracing::warn!(%filter, "filter matched no measurements, series will be empty");
        }
        rows.sort_by_key(|m| m.size);

        Series {
            label,
            color,
            points: rows.iter().map(|m| (m.size, m.time_us)).collect(),
        }
    }
}
