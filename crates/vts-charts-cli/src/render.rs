//! Subcommand implementations.
use std::path::Path;

use anyhow::{Context, Result};

use vts_charts::io::{read_grid_csv, read_series_csv};
use vts_charts::{heatmap, line_chart, save_html, scatter_chart, Chart, DoubleRange};

use crate::config::RenderConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Scatter,
    Line,
}

/// Build a scatter or line chart from a two-column CSV file.
pub fn build_series_chart(kind: SeriesKind, data: &Path, config: &RenderConfig) -> Result<Chart> {
    let (x, y) = read_series_csv(data, config.has_headers)?;
    let chart = match kind {
        SeriesKind::Scatter => scatter_chart(&x, &y, &config.labels),
        SeriesKind::Line => line_chart(&x, &y, &config.labels),
    }
    .with_context(|| format!("Cannot chart series from {}", data.display()))?;
    Ok(chart)
}

fn axis_values(range: &DoubleRange, midpoints: bool) -> Result<Vec<f64>> {
    if midpoints {
        Ok(range.midpoints()?)
    } else {
        Ok(range.to_vec())
    }
}

/// Build a heatmap from a headerless grid CSV and two axis ranges.
pub fn build_heatmap_chart(
    grid: &Path,
    x_range: &DoubleRange,
    y_range: &DoubleRange,
    config: &RenderConfig,
) -> Result<Chart> {
    let values = read_grid_csv(grid)?;
    let x = axis_values(x_range, config.midpoints)?;
    let y = axis_values(y_range, config.midpoints)?;
    let chart = heatmap(&values, &x, &y, &config.labels)
        .with_context(|| format!("Cannot chart grid from {}", grid.display()))?;
    Ok(chart)
}

/// Write the chart to the configured output file.
pub fn write_chart(chart: &Chart, config: &RenderConfig) -> Result<()> {
    save_html(chart, &config.output_file)
        .with_context(|| format!("Failed to write {}", config.output_file.display()))?;
    Ok(())
}
