use std::path::Path;

use chrono::{DateTime, Local};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::charts::Chart;
use crate::error::ChartResult;

const PLOTLY_JS_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

/// Write `chart` as a standalone HTML page.
pub fn save_html<P: AsRef<Path>>(chart: &Chart, path: P) -> ChartResult<()> {
    std::fs::write(&path, chart.to_html())?;
    log::info!("Wrote chart '{}' to {}", chart.style.name, path.as_ref().display());
    Ok(())
}

/// One chart of a report, with its heading and an optional caption.
#[derive(Debug, Clone)]
pub struct ReportSection {
    pub heading: String,
    pub description: Option<String>,
    pub chart: Chart,
}

impl ReportSection {
    pub fn new(heading: &str, chart: Chart) -> Self {
        Self {
            heading: heading.to_string(),
            description: None,
            chart,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// A single HTML page holding several charts.
#[derive(Debug, Clone)]
pub struct ChartReport {
    title: String,
    created: DateTime<Local>,
    sections: Vec<ReportSection>,
}

impl ChartReport {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            created: Local::now(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) -> &mut Self {
        self.sections.push(section);
        self
    }

    pub fn add_chart(&mut self, heading: &str, chart: Chart) -> &mut Self {
        self.add_section(ReportSection::new(heading, chart))
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src=(PLOTLY_JS_CDN) {}
                }
                body {
                    h1 { (self.title) }
                    p class="generated" {
                        "Generated " (self.created.format("%Y-%m-%d %H:%M:%S").to_string())
                    }
                    @for (idx, section) in self.sections.iter().enumerate() {
                        section {
                            h2 { (section.heading) }
                            @if let Some(description) = &section.description {
                                p { (description) }
                            }
                            @let div_id = format!("chart-{}", idx);
                            (PreEscaped(section.chart.to_inline_html(Some(div_id.as_str()))))
                        }
                    }
                }
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.render().into_string()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ChartResult<()> {
        std::fs::write(&path, self.to_html())?;
        log::info!(
            "Wrote report '{}' with {} chart(s) to {}",
            self.title,
            self.sections.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}
