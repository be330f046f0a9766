//! Benchmark dataset loading and filtering

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// One benchmark measurement, as written by the sorting benchmark driver.
///
/// Columns are matched by header name, so the producer is free to reorder
/// them. The driver writes `Threshold` as `0` for algorithms that take no
/// threshold; the value is ignored for those rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Input distribution the array was generated from
    #[serde(rename = "ArrayType")]
    pub array_type: String,
    /// Sorting algorithm under test
    #[serde(rename = "Algorithm")]
    pub algorithm: String,
    /// Insertion-sort switchover threshold of the hybrid sort
    #[serde(rename = "Threshold")]
    pub threshold: u32,
    /// Array length for this measurement
    #[serde(rename = "Size")]
    pub size: u32,
    /// Measured execution time
    #[serde(rename = "TimeMicroseconds")]
    pub time_us: u64,
}

/// Equality predicate over measurement categories.
///
/// Unset fields match everything, so a filter can select on any subset of
/// `(ArrayType, Algorithm, Threshold)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementFilter {
    pub array_type: Option<String>,
    pub algorithm: Option<String>,
    pub threshold: Option<u32>,
}

impl MeasurementFilter {
    /// Create a filter that matches every measurement
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one input distribution
    pub fn with_array_type(mut self, array_type: impl Into<String>) -> Self {
        self.array_type = Some(array_type.into());
        self
    }

    /// Restrict to one algorithm
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    /// Restrict to one hybrid-sort threshold
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Check whether a measurement satisfies every set field
    pub fn matches(&self, m: &Measurement) -> bool {
        self.array_type
            .as_ref()
            .map_or(true, |v| *v == m.array_type)
            && self.algorithm.as_ref().map_or(true, |v| *v == m.algorithm)
            && self.threshold.map_or(true, |v| v == m.threshold)
    }
}

impl fmt::Display for MeasurementFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(v) = &self.array_type {
            write!(f, "ArrayType={v}")?;
            sep = ", ";
        }
        if let Some(v) = &self.algorithm {
            write!(f, "{sep}Algorithm={v}")?;
            sep = ", ";
        }
        if let Some(v) = self.threshold {
            write!(f, "{sep}Threshold={v}")?;
            sep = ", ";
        }
        if sep.is_empty() {
            write!(f, "unfiltered")?;
        }
        Ok(())
    }
}

/// The full benchmark table, read-only after load
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Measurement>,
}

impl Dataset {
    /// Load a dataset from a CSV file with a header row
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data_load = |source| ReportError::DataLoad {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::Reader::from_path(path).map_err(data_load)?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: Measurement = row.map_err(data_load)?;
            records.push(record);
        }

        Ok(Self { records })
    }

    /// Build a dataset from already-parsed measurements
    pub fn from_records(records: Vec<Measurement>) -> Self {
        Self { records }
    }

    /// Number of measurements
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all measurements in source order
    pub fn iter(&self) -> impl Iterator<Item = &Measurement> {
        self.records.iter()
    }

    /// Measurements matching the filter, in source order
    pub fn filter(&self, filter: &MeasurementFilter) -> Vec<&Measurement> {
        self.records.iter().filter(|m| filter.matches(m)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record(
        array_type: &str,
        algorithm: &str,
        threshold: u32,
        size: u32,
        time_us: u64,
    ) -> Measurement {
        Measurement {
            array_type: array_type.to_string(),
            algorithm: algorithm.to_string(),
            threshold,
            size,
            time_us,
        }
    }

    #[test]
    fn loads_one_record_per_data_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sorting_results.csv");
        // Column order used by the benchmark driver
        fs::write(
            &path,
            "ArrayType,Size,Algorithm,TimeMicroseconds,Threshold\n\
             Random,500,MergeSort,1200,0\n\
             Random,500,HybridSort,800,20\n\
             Reversed,600,HybridSort,900,5\n",
        )
        .unwrap();

        let dataset = Dataset::from_csv(&path).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(
            dataset.iter().next().unwrap(),
            &record("Random", "MergeSort", 0, 500, 1200)
        );
    }

    #[test]
    fn load_is_independent_of_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reordered.csv");
        fs::write(
            &path,
            "ArrayType,Algorithm,Threshold,Size,TimeMicroseconds\n\
             AlmostSorted,HybridSort,10,1000,450\n",
        )
        .unwrap();

        let dataset = Dataset::from_csv(&path).unwrap();
        assert_eq!(
            dataset.iter().next().unwrap(),
            &record("AlmostSorted", "HybridSort", 10, 1000, 450)
        );
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.csv");

        let err = Dataset::from_csv(&path).unwrap_err();
        assert!(matches!(err, ReportError::DataLoad { .. }));
        assert!(err.to_string().contains("does_not_exist.csv"));
    }

    #[test]
    fn load_fails_for_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_threshold.csv");
        fs::write(
            &path,
            "ArrayType,Size,Algorithm,TimeMicroseconds\n\
             Random,500,MergeSort,1200\n",
        )
        .unwrap();

        let err = Dataset::from_csv(&path).unwrap_err();
        assert!(matches!(err, ReportError::DataLoad { .. }));
    }

    #[test]
    fn load_fails_for_malformed_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_value.csv");
        fs::write(
            &path,
            "ArrayType,Size,Algorithm,TimeMicroseconds,Threshold\n\
             Random,500,MergeSort,fast,0\n",
        )
        .unwrap();

        let err = Dataset::from_csv(&path).unwrap_err();
        assert!(matches!(err, ReportError::DataLoad { .. }));
    }

    #[test]
    fn filter_matches_all_set_fields() {
        let dataset = Dataset::from_records(vec![
            record("Random", "HybridSort", 20, 500, 100),
            record("Random", "HybridSort", 5, 500, 110),
            record("Random", "MergeSort", 0, 500, 150),
            record("Reversed", "HybridSort", 20, 500, 120),
        ]);

        let filter = MeasurementFilter::new()
            .with_array_type("Random")
            .with_algorithm("HybridSort")
            .with_threshold(20);
        let matched = dataset.filter(&filter);

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].time_us, 100);
    }

    #[test]
    fn unset_filter_fields_match_everything() {
        let dataset = Dataset::from_records(vec![
            record("Random", "HybridSort", 20, 500, 100),
            record("Reversed", "HybridSort", 5, 500, 120),
            record("Random", "MergeSort", 0, 500, 150),
        ]);

        let hybrids = dataset.filter(&MeasurementFilter::new().with_algorithm("HybridSort"));
        assert_eq!(hybrids.len(), 2);

        let all = dataset.filter(&MeasurementFilter::new());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn filter_preserves_source_order() {
        let dataset = Dataset::from_records(vec![
            record("Random", "HybridSort", 20, 2000, 300),
            record("Random", "HybridSort", 20, 500, 100),
            record("Random", "HybridSort", 20, 1000, 200),
        ]);

        let sizes: Vec<u32> = dataset
            .filter(&MeasurementFilter::new().with_threshold(20))
            .iter()
            .map(|m| m.size)
            .collect();
        assert_eq!(sizes, vec![2000, 500, 1000]);
    }

    #[test]
    fn threshold_subsets_partition_hybrid_records() {
        let thresholds = [5u32, 10, 20, 30, 50];
        let mut records = Vec::new();
        for size in [500, 1000, 1500] {
            for &t in &thresholds {
                records.push(record("Random", "HybridSort", t, size, 100 + t as u64));
            }
            records.push(record("Random", "MergeSort", 0, size, 200));
        }
        let dataset = Dataset::from_records(records);

        let hybrid_random = dataset.filter(
            &MeasurementFilter::new()
                .with_array_type("Random")
                .with_algorithm("HybridSort"),
        );

        let mut covered = 0;
        for &t in &thresholds {
            let subset = dataset.filter(
                &MeasurementFilter::new()
                    .with_array_type("Random")
                    .with_algorithm("HybridSort")
                    .with_threshold(t),
            );
            assert!(subset.iter().all(|m| m.threshold == t));
            covered += subset.len();
        }
        assert_eq!(covered, hybrid_random.len());
    }

    #[test]
    fn filter_display_names_set_fields() {
        let filter = MeasurementFilter::new()
            .with_array_type("Random")
            .with_threshold(20);
        assert_eq!(filter.to_string(), "ArrayType=Random, Threshold=20");
        assert_eq!(MeasurementFilter::new().to_string(), "unfiltered");
    }
}
