use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Errors raised while building or exporting charts.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("x and y series must have equal lengths (x: {x}, y: {y})")]
    LengthMismatch { x: usize, y: usize },

    #[error("{axis} axis values must not be empty")]
    EmptyAxis { axis: char },

    #[error("at least 2 boundary values are required to compute midpoints, got {0}")]
    TooFewBoundaries(usize),

    #[error("heatmap row {row} has {found} values, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("heatmap values do not form a grid: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("failed to write chart: {0}")]
    Io(#[from] std::io::Error),
}
