//! Line chart rendering

use crate::charts::ChartSpec;
use crate::error::{ReportError, Result};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Print-quality output size
const CHART_SIZE: (u32, u32) = (1200, 800);

pub struct LinePlotter;

impl LinePlotter {
    /// Render a chart spec to a PNG file
    pub fn render(spec: &ChartSpec, path: &Path) -> Result<()> {
        Self::draw(spec, path).map_err(|err| ReportError::Render {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    fn draw(spec: &ChartSpec, path: &Path) -> anyhow::Result<()> {
        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let (x_range, y_range) = axis_ranges(spec);

        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, ("sans-serif", 40))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .x_label_formatter(&|x| format!("{x:.0}"))
            .y_label_formatter(&|y| format!("{y:.0}"))
            .draw()?;

        for series in &spec.series {
            let color = series.color;
            let points = series
                .points
                .iter()
                .map(|&(size, time)| (size as f64, time as f64));

            chart
                .draw_series(LineSeries::new(points, color.stroke_width(2)))?
                .label(series.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

/// Axis ranges covering every point of every series.
///
/// Empty charts and degenerate single-point ranges fall back to a unit span
/// so the backend always gets a non-empty range.
fn axis_ranges(spec: &ChartSpec) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_max = 0f64;

    for &(x, y) in spec.series.iter().flat_map(|s| s.points.iter()) {
        x_min = x_min.min(x as f64);
        x_max = x_max.max(x as f64);
        y_max = y_max.max(y as f64);
    }

    if !x_min.is_finite() {
        x_min = 0.0;
        x_max = 1.0;
    }
    if x_min >= x_max {
        x_max = x_min + 1.0;
    }
    if y_max <= 0.0 {
        y_max = 1.0;
    }

    (x_min..x_max, 0.0..y_max * 1.1)
}
