//! Heatmap charts of a z-grid over x/y cell centers.
use ndarray::Array2;

use crate::charts::chart::{AxisType, Chart, Trace};
use crate::charts::styling::{with_standard_styling, ChartLabels};
use crate::error::{ChartError, ChartResult};

/// Standard heatmap chart.
///
/// `values` holds one row per x value; it is transposed so that plotly draws
/// `values[i][j]` at `(x[i], y[j])`. The y axis is linear and reversed so the
/// first y value sits at the top, both axes are bounded by the first and last
/// element of `x` and `y`, and the colorbar and cell hover text carry the
/// chart title.
///
/// `x` and `y` must not be empty and every row of `values` must have the
/// same length.
pub fn heatmap<R: AsRef<[f64]>>(
    values: &[R],
    x: &[f64],
    y: &[f64],
    labels: &ChartLabels,
) -> ChartResult<Chart> {
    let x_bounds = axis_bounds(x, 'x')?;
    let y_bounds = axis_bounds(y, 'y')?;
    let z = transpose(values)?;

    log::debug!(
        "Building heatmap '{}' from a {}x{} grid",
        labels.title,
        values.len(),
        z.len()
    );

    let chart = Chart::new(Trace::Heatmap {
        x: x.to_vec(),
        y: y.to_vec(),
        z,
    });
    let mut chart = with_standard_styling(chart, labels);

    let style = &mut chart.style;
    style.x_axis.range = Some(x_bounds);
    style.y_axis.range = Some(y_bounds);
    style.y_axis.reversed = true;
    style.y_axis.axis_type = Some(AxisType::Linear);
    style.color_bar_title = Some(labels.title.clone());
    style.cell_text = Some(labels.title.clone());

    Ok(chart)
}

fn axis_bounds(values: &[f64], axis: char) -> ChartResult<(f64, f64)> {
    match (values.first(), values.last()) {
        (Some(first), Some(last)) => Ok((*first, *last)),
        _ => {
            log::warn!("Rejecting heatmap: {} axis values are empty", axis);
            Err(ChartError::EmptyAxis { axis })
        }
    }
}

/// Swap rows and columns of a rectangular grid.
fn transpose<R: AsRef<[f64]>>(values: &[R]) -> ChartResult<Vec<Vec<f64>>> {
    let cols = values.first().map_or(0, |row| row.as_ref().len());
    let mut flat = Vec::with_capacity(values.len() * cols);
    for (row, data) in values.iter().enumerate() {
        let data = data.as_ref();
        if data.len() != cols {
            return Err(ChartError::RaggedGrid {
                row,
                expected: cols,
                found: data.len(),
            });
        }
        flat.extend_from_slice(data);
    }

    let grid = Array2::from_shape_vec((values.len(), cols), flat)?;
    Ok(grid.t().outer_iter().map(|column| column.to_vec()).collect())
}
