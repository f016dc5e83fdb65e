//! vts-charts: standard chart builders for simulation scripting.
//!
//! The crate wraps the `plotly` crate with a handful of helpers that build
//! scatter, line and heatmap charts with one consistent look: axis titles,
//! a legend anchored at a fixed position and a "Hot" heatmap color scale.
//! Charts are plain values; render them with [`Chart::to_plot`] or export
//! them with [`save_html`] and [`ChartReport`].
pub mod charts;
pub mod error;
pub mod io;
pub mod range;
pub mod report;

pub use charts::{
    heatmap, line_chart, scatter_chart, with_standard_styling, AxisStyle, AxisType, Chart,
    ChartLabels, ChartStyle, SeriesMode, Trace, HEATMAP_COLOR_SCALE, LEGEND_ANCHOR,
};
pub use error::{ChartError, ChartResult};
pub use range::{midpoints, DoubleRange};
pub use report::{save_html, ChartReport, ReportSection};
