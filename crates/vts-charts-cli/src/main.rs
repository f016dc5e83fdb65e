use anyhow::Result;
use clap::ArgMatches;
use log::LevelFilter;
use std::path::PathBuf;

use vts_charts::DoubleRange;
use vts_charts_cli::cli::build_cli;
use vts_charts_cli::config::RenderConfig;
use vts_charts_cli::render::{build_heatmap_chart, build_series_chart, write_chart, SeriesKind};

// The binary's crate name collides with the library's, so name the target explicitly.
const LOG_TARGET: &str = "vts_charts_cli";

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("VTS_CHARTS_LOG", "error,vts_charts=info,vts_charts_cli=info"))
        .init();

    let matches = build_cli().get_matches();

    let outcome = match matches.subcommand() {
        Some(("scatter", sub_m)) => handle_series(SeriesKind::Scatter, sub_m),
        Some(("line", sub_m)) => handle_series(SeriesKind::Line, sub_m),
        Some(("heatmap", sub_m)) => handle_heatmap(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    if let Err(e) = outcome {
        log::error!(target: LOG_TARGET, "Rendering failed: {:#}", e);
        std::process::exit(1)
    }
    Ok(())
}

fn handle_series(kind: SeriesKind, matches: &ArgMatches) -> Result<()> {
    let data: &PathBuf = matches.get_one("data").expect("data is a required argument");
    log::info!(target: LOG_TARGET, "[VTS::Charts] Rendering {:?} chart from {:?}", kind, data);

    let config = RenderConfig::from_arguments(matches)?;
    let chart = build_series_chart(kind, data, &config)?;
    write_chart(&chart, &config)
}

fn handle_heatmap(matches: &ArgMatches) -> Result<()> {
    let grid: &PathBuf = matches.get_one("grid").expect("grid is a required argument");
    let x_range: &DoubleRange = matches.get_one("x_range").expect("x-range is a required argument");
    let y_range: &DoubleRange = matches.get_one("y_range").expect("y-range is a required argument");
    log::info!(target: LOG_TARGET, "[VTS::Charts] Rendering heatmap from {:?}", grid);

    let config = RenderConfig::from_arguments(matches)?;
    let chart = build_heatmap_chart(grid, x_range, y_range, &config)?;
    write_chart(&chart, &config)
}
