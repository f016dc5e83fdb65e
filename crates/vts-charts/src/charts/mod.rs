//! Chart model and the standard chart builders.
pub mod chart;
pub mod heatmap;
pub mod series;
pub mod styling;

pub use chart::{AxisStyle, AxisType, Chart, ChartStyle, SeriesMode, Trace, HEATMAP_COLOR_SCALE};
pub use heatmap::heatmap;
pub use series::{line_chart, scatter_chart};
pub use styling::{with_standard_styling, ChartLabels, LEGEND_ANCHOR};
