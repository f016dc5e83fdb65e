use clap::{Arg, ArgAction, Command, ValueHint};
use std::path::PathBuf;

use vts_charts::DoubleRange;

fn shared_args() -> [Arg; 5] {
    [
        Arg::new("config")
            .long("config")
            .short('c')
            .help("Path to a JSON render configuration file")
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath),
        Arg::new("output_file")
            .short('o')
            .long("output")
            .help("Path of the HTML file to write. Overrides the configuration file.")
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath),
        Arg::new("x_label")
            .long("x-label")
            .help("X axis label. Overrides the configuration file.")
            .value_hint(ValueHint::Other),
        Arg::new("y_label")
            .long("y-label")
            .help("Y axis label. Overrides the configuration file.")
            .value_hint(ValueHint::Other),
        Arg::new("title")
            .short('t')
            .long("title")
            .help("Chart title; also enables the legend. Overrides the configuration file.")
            .value_hint(ValueHint::Other),
    ]
}

fn series_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("data")
                .help("CSV file with x values in the first column and y values in the second")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("no_headers")
                .long("no-headers")
                .help("Treat the first CSV line as data.")
                .action(ArgAction::SetTrue),
        )
        .args(shared_args())
}

/// The `vts-charts` command definition.
pub fn build_cli() -> Command {
    Command::new("vts-charts")
        .version(clap::crate_version!())
        .about("Render scatter, line and heatmap charts from CSV data as HTML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(series_command("scatter", "Render a scatter chart of an (x, y) series"))
        .subcommand(series_command("line", "Render a line chart of an (x, y) series"))
        .subcommand(
            Command::new("heatmap")
                .about("Render a heatmap of a numeric grid, one row per x value")
                .arg(
                    Arg::new("grid")
                        .help("Headerless CSV file holding the grid values")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("x_range")
                        .long("x-range")
                        .help("X axis values as start:stop:count")
                        .required(true)
                        .value_parser(clap::value_parser!(DoubleRange)),
                )
                .arg(
                    Arg::new("y_range")
                        .long("y-range")
                        .help("Y axis values as start:stop:count")
                        .required(true)
                        .value_parser(clap::value_parser!(DoubleRange)),
                )
                .arg(
                    Arg::new("midpoints")
                        .long("midpoints")
                        .help("Place cells at the midpoints of the axis ranges instead of their endpoints.")
                        .action(ArgAction::SetTrue),
                )
                .args(shared_args()),
        )
}
