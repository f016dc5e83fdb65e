//! Scatter and line charts of a single `(x, y)` series.
use crate::charts::chart::{Chart, SeriesMode, Trace};
use crate::charts::styling::{with_standard_styling, ChartLabels};
use crate::error::{ChartError, ChartResult};

/// Standard scatter chart: one marker per `(x, y)` point.
pub fn scatter_chart(x: &[f64], y: &[f64], labels: &ChartLabels) -> ChartResult<Chart> {
    series_chart(x, y, SeriesMode::Markers, labels)
}

/// Standard line chart: the `(x, y)` points joined in order.
pub fn line_chart(x: &[f64], y: &[f64], labels: &ChartLabels) -> ChartResult<Chart> {
    series_chart(x, y, SeriesMode::Lines, labels)
}

fn series_chart(
    x: &[f64],
    y: &[f64],
    mode: SeriesMode,
    labels: &ChartLabels,
) -> ChartResult<Chart> {
    if x.len() != y.len() {
        log::warn!(
            "Rejecting {:?} chart '{}': x has {} values, y has {}",
            mode,
            labels.title,
            x.len(),
            y.len()
        );
        return Err(ChartError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    log::debug!(
        "Building {:?} chart '{}' with {} points",
        mode,
        labels.title,
        x.len()
    );
    let chart = Chart::new(Trace::Series {
        x: x.to_vec(),
        y: y.to_vec(),
        mode,
    });
    Ok(with_standard_styling(chart, labels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_uses_markers() {
        let chart = scatter_chart(&[1.0, 2.0], &[3.0, 4.0], &ChartLabels::default()).unwrap();
        match chart.trace {
            Trace::Series { mode, ref x, ref y } => {
                assert_eq!(mode, SeriesMode::Markers);
                assert_eq!(x, &vec![1.0, 2.0]);
                assert_eq!(y, &vec![3.0, 4.0]);
            }
            _ => panic!("expected a series trace"),
        }
    }

    #[test]
    fn line_uses_lines() {
        let chart = line_chart(&[1.0, 2.0], &[3.0, 4.0], &ChartLabels::default()).unwrap();
        assert!(matches!(
            chart.trace,
            Trace::Series {
                mode: SeriesMode::Lines,
                ..
            }
        ));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = line_chart(&[1.0, 2.0, 3.0], &[1.0], &ChartLabels::default()).unwrap_err();
        assert!(matches!(err, ChartError::LengthMismatch { x: 3, y: 1 }));
    }

    #[test]
    fn empty_series_is_allowed() {
        let chart = scatter_chart(&[], &[], &ChartLabels::default()).unwrap();
        assert!(!chart.style.show_legend);
    }
}
