//! CSV readers for chart data.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

fn parse_field(record: &StringRecord, column: usize, line: u64) -> Result<f64> {
    let raw = record
        .get(column)
        .ok_or_else(|| anyhow!("line {}: missing column {}", line, column + 1))?;
    raw.parse::<f64>()
        .with_context(|| format!("line {}: '{}' is not a number", line, raw))
}

/// Read an `(x, y)` series from the first two columns of a CSV file.
///
/// Extra columns are ignored. With `has_headers` the first line is skipped.
pub fn read_series_csv<P: AsRef<Path>>(path: P, has_headers: bool) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .trim(csv::Trim::All)
        .from_path(&path)
        .with_context(|| format!("Failed to open series file: {}", path.as_ref().display()))?;

    let mut x = Vec::new();
    let mut y = Vec::new();
    for result in reader.records() {
        let record = result
            .with_context(|| format!("Failed to read series file: {}", path.as_ref().display()))?;
        let line = record.position().map_or(0, |pos| pos.line());
        x.push(parse_field(&record, 0, line)?);
        y.push(parse_field(&record, 1, line)?);
    }

    log::debug!(
        "Read {} points from {}",
        x.len(),
        path.as_ref().display()
    );
    Ok((x, y))
}

/// Read a headerless numeric matrix, one grid row per line.
pub fn read_grid_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<f64>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(&path)
        .with_context(|| format!("Failed to open grid file: {}", path.as_ref().display()))?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result
            .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;
        let line = record.position().map_or(0, |pos| pos.line());
        let row = (0..record.len())
            .map(|column| parse_field(&record, column, line))
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    log::debug!(
        "Read {} grid rows from {}",
        rows.len(),
        path.as_ref().display()
    );
    Ok(rows)
}
