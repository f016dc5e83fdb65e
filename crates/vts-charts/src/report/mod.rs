//! HTML export of single charts and multi-chart reports.
pub mod report;

pub use report::{save_html, ChartReport, ReportSection};
