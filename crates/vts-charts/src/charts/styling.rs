//! The look shared by every chart: axis titles, trace name and legend.
use serde::{Deserialize, Serialize};

use crate::charts::chart::Chart;

/// Legend position `(x, y)` in layout coordinates.
pub const LEGEND_ANCHOR: (f64, f64) = (0.0, 150.0);

/// Axis labels and title for a chart. Every field defaults to empty.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ChartLabels {
    pub x_label: String,
    pub y_label: String,
    pub title: String,
}

impl ChartLabels {
    pub fn new(x_label: &str, y_label: &str, title: &str) -> Self {
        Self {
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            title: title.to_string(),
        }
    }

    pub fn with_x_label(mut self, x_label: &str) -> Self {
        self.x_label = x_label.to_string();
        self
    }

    pub fn with_y_label(mut self, y_label: &str) -> Self {
        self.y_label = y_label.to_string();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Whether the legend should be drawn; whitespace-only titles count as blank.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Apply the standard styling to `chart` and return it.
///
/// Sets the trace name to the title and shows the legend only for a
/// non-blank title, sets both axis titles and anchors the legend at
/// [`LEGEND_ANCHOR`]. Axis ranges, axis types and the colorbar are left
/// untouched, so applying it again simply replaces the labels.
pub fn with_standard_styling(mut chart: Chart, labels: &ChartLabels) -> Chart {
    let style = &mut chart.style;
    style.name = labels.title.clone();
    style.show_legend = labels.has_title();
    style.x_axis.title = labels.x_label.clone();
    style.y_axis.title = labels.y_label.clone();
    style.legend_anchor = LEGEND_ANCHOR;
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::chart::{SeriesMode, Trace};

    fn bare_chart() -> Chart {
        Chart::new(Trace::Series {
            x: vec![1.0, 2.0],
            y: vec![3.0, 4.0],
            mode: SeriesMode::Markers,
        })
    }

    #[test]
    fn blank_titles_hide_the_legend() {
        assert!(!ChartLabels::default().has_title());
        assert!(!ChartLabels::default().with_title("  \t").has_title());
        assert!(ChartLabels::default().with_title("Fluence").has_title());
    }

    #[test]
    fn styling_sets_labels_and_anchor() {
        let labels = ChartLabels::new("rho [mm]", "R(rho)", "Reflectance");
        let chart = with_standard_styling(bare_chart(), &labels);

        assert_eq!(chart.style.name, "Reflectance");
        assert!(chart.style.show_legend);
        assert_eq!(chart.style.x_axis.title, "rho [mm]");
        assert_eq!(chart.style.y_axis.title, "R(rho)");
        assert_eq!(chart.style.legend_anchor, LEGEND_ANCHOR);
    }

    #[test]
    fn styling_keeps_axis_bounds() {
        let mut chart = bare_chart();
        chart.style.x_axis.range = Some((0.0, 10.0));
        let chart = with_standard_styling(chart, &ChartLabels::default().with_x_label("x"));
        assert_eq!(chart.style.x_axis.range, Some((0.0, 10.0)));
        assert_eq!(chart.style.x_axis.title, "x");
    }

    #[test]
    fn labels_deserialize_with_missing_fields() {
        let labels: ChartLabels = serde_json::from_str(r#"{"title": "Fluence"}"#).unwrap();
        assert_eq!(labels, ChartLabels::default().with_title("Fluence"));
    }
}
