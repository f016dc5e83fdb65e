//! Render configuration: JSON file, then command line overrides.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use vts_charts::ChartLabels;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub labels: ChartLabels,
    pub output_file: PathBuf,
    /// Whether series CSV files start with a header line.
    pub has_headers: bool,
    /// Sample heatmap axes at range midpoints instead of endpoints.
    pub midpoints: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            labels: ChartLabels::default(),
            output_file: PathBuf::from("vts_chart.html"),
            has_headers: true,
            midpoints: false,
        }
    }
}

/// Load a render configuration from a JSON file. Missing fields keep their defaults.
pub fn load_render_config<P: AsRef<Path>>(path: P) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: RenderConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

fn flag_set(matches: &ArgMatches, id: &str) -> bool {
    matches!(matches.try_get_one::<bool>(id), Ok(Some(true)))
}

impl RenderConfig {
    /// Build the configuration for one subcommand: the `--config` file (or
    /// defaults) with command line values applied on top.
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let mut config = match matches.get_one::<PathBuf>("config") {
            Some(path) => {
                log::info!("[VTS::Charts] Using config: {:?}", path);
                load_render_config(path)?
            }
            None => {
                log::debug!("[VTS::Charts] No config provided; using defaults.");
                RenderConfig::default()
            }
        };
        config.apply_overrides(matches);
        Ok(config)
    }

    pub fn apply_overrides(&mut self, matches: &ArgMatches) {
        if let Some(output_file) = matches.get_one::<PathBuf>("output_file") {
            self.output_file = output_file.clone();
        }
        if let Some(x_label) = matches.get_one::<String>("x_label") {
            self.labels.x_label = x_label.clone();
        }
        if let Some(y_label) = matches.get_one::<String>("y_label") {
            self.labels.y_label = y_label.clone();
        }
        if let Some(title) = matches.get_one::<String>("title") {
            self.labels.title = title.clone();
        }
        if flag_set(matches, "no_headers") {
            self.has_headers = false;
        }
        if flag_set(matches, "midpoints") {
            self.midpoints = true;
        }
    }
}
