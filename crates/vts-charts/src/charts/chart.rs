//! The chart value returned by the builders and its mapping onto plotly.
use plotly::common::{ColorBar, ColorScale, ColorScalePalette, Mode};
use plotly::layout::{Axis, Legend};
use plotly::{HeatMap, Layout, Plot, Scatter};

/// Color scale used by every heatmap.
pub const HEATMAP_COLOR_SCALE: ColorScalePalette = ColorScalePalette::Hot;

/// How the points of a series are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesMode {
    Markers,
    Lines,
}

impl From<SeriesMode> for Mode {
    fn from(mode: SeriesMode) -> Self {
        match mode {
            SeriesMode::Markers => Mode::Markers,
            SeriesMode::Lines => Mode::Lines,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisType {
    Linear,
}

impl From<AxisType> for plotly::layout::AxisType {
    fn from(axis_type: AxisType) -> Self {
        match axis_type {
            AxisType::Linear => plotly::layout::AxisType::Linear,
        }
    }
}

/// The data drawn by a chart.
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    Series {
        x: Vec<f64>,
        y: Vec<f64>,
        mode: SeriesMode,
    },
    /// `z[i][j]` is drawn at `(x[j], y[i])`.
    Heatmap {
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<Vec<f64>>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisStyle {
    pub title: String,
    /// Explicit `(min, max)` bounds; `None` leaves the range to the engine.
    pub range: Option<(f64, f64)>,
    /// Draw the axis from max to min. Requires explicit bounds.
    pub reversed: bool,
    pub axis_type: Option<AxisType>,
}

impl AxisStyle {
    /// Bounds in drawing order, i.e. flipped when the axis is reversed.
    pub fn render_range(&self) -> Option<[f64; 2]> {
        self.range.map(|(min, max)| {
            if self.reversed {
                [max, min]
            } else {
                [min, max]
            }
        })
    }

    fn to_axis(&self) -> Axis {
        let mut axis = Axis::new().title(self.title.as_str());
        if let Some(axis_type) = self.axis_type {
            axis = axis.type_(axis_type.into());
        }
        if let Some(bounds) = self.render_range() {
            axis = axis.range(bounds.to_vec());
        } else if self.reversed {
            log::warn!(
                "Axis '{}' is reversed without explicit bounds; drawing it in natural order",
                self.title
            );
        }
        axis
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartStyle {
    /// Trace name shown in the legend.
    pub name: String,
    pub show_legend: bool,
    /// Legend position in layout coordinates.
    pub legend_anchor: (f64, f64),
    pub x_axis: AxisStyle,
    pub y_axis: AxisStyle,
    pub color_bar_title: Option<String>,
    /// Label shown with every heatmap cell on hover.
    pub cell_text: Option<String>,
}

impl ChartStyle {
    /// Hover template prefixing cell coordinates with the cell text, if any.
    pub fn hover_template(&self) -> Option<String> {
        self.cell_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .map(|text| {
                format!(
                    "{}<br>x: %{{x}}<br>y: %{{y}}<br>z: %{{z}}<extra></extra>",
                    text
                )
            })
    }
}

/// A single-trace chart. Owned entirely by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub trace: Trace,
    pub style: ChartStyle,
}

impl Chart {
    /// An unstyled chart around `trace`.
    pub fn new(trace: Trace) -> Self {
        Self {
            trace,
            style: ChartStyle::default(),
        }
    }

    /// Build the plotly figure for this chart.
    pub fn to_plot(&self) -> Plot {
        let style = &self.style;
        let mut plot = Plot::new();

        match &self.trace {
            Trace::Series { x, y, mode } => {
                let trace = Scatter::new(x.clone(), y.clone())
                    .mode((*mode).into())
                    .name(style.name.as_str())
                    .show_legend(style.show_legend);
                plot.add_trace(trace);
            }
            Trace::Heatmap { x, y, z } => {
                let mut trace = HeatMap::new(x.clone(), y.clone(), z.clone())
                    .color_scale(ColorScale::Palette(HEATMAP_COLOR_SCALE))
                    .name(style.name.as_str())
                    .show_legend(style.show_legend);
                if let Some(title) = &style.color_bar_title {
                    trace = trace.color_bar(ColorBar::new().title(title.as_str()));
                }
                if let Some(template) = style.hover_template() {
                    trace = trace.hover_template(template.as_str());
                }
                plot.add_trace(trace);
            }
        }

        let (legend_x, legend_y) = style.legend_anchor;
        let layout = Layout::new()
            .x_axis(style.x_axis.to_axis())
            .y_axis(style.y_axis.to_axis())
            .legend(Legend::new().x(legend_x).y(legend_y));
        plot.set_layout(layout);

        plot
    }

    /// plotly JSON (`data` + `layout`) for this chart.
    pub fn to_json(&self) -> String {
        self.to_plot().to_json()
    }

    /// Standalone HTML page that loads plotly.js and draws this chart.
    pub fn to_html(&self) -> String {
        self.to_plot().to_html()
    }

    /// HTML fragment for embedding the chart into a larger page.
    pub fn to_inline_html(&self, div_id: Option<&str>) -> String {
        self.to_plot().to_inline_html(div_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_axis_flips_render_range() {
        let axis = AxisStyle {
            range: Some((0.0, 5.0)),
            reversed: true,
            ..Default::default()
        };
        assert_eq!(axis.render_range(), Some([5.0, 0.0]));

        let natural = AxisStyle {
            range: Some((0.0, 5.0)),
            ..Default::default()
        };
        assert_eq!(natural.render_range(), Some([0.0, 5.0]));
        assert_eq!(AxisStyle::default().render_range(), None);
    }

    #[test]
    fn new_chart_is_unstyled() {
        let chart = Chart::new(Trace::Series {
            x: vec![1.0],
            y: vec![2.0],
            mode: SeriesMode::Lines,
        });
        assert_eq!(chart.style, ChartStyle::default());
        assert!(!chart.style.show_legend);
    }

    #[test]
    fn hover_template_needs_cell_text() {
        let mut style = ChartStyle::default();
        assert_eq!(style.hover_template(), None);

        style.cell_text = Some("   ".to_string());
        assert_eq!(style.hover_template(), None);

        style.cell_text = Some("Fluence".to_string());
        let template = style.hover_template().unwrap();
        assert!(template.starts_with("Fluence<br>"));
        assert!(template.contains("%{z}"));
    }

    #[test]
    fn linear_axis_type_maps_to_plotly() {
        let axis = AxisStyle {
            axis_type: Some(AxisType::Linear),
            ..Default::default()
        };
        let layout = Layout::new().y_axis(axis.to_axis());
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["yaxis"]["type"], "linear");
    }

    #[test]
    fn chart_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Chart>();
    }
}
