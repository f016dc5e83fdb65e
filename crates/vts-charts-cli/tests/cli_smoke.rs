//! CLI binary smoke tests using assert_cmd.
//!
//! These tests run the compiled `vts-charts` binary to check argument
//! parsing, logging, exit codes and the written HTML end-to-end.

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("vts-charts").unwrap()
}

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scatter"))
        .stdout(predicate::str::contains("line"))
        .stdout(predicate::str::contains("heatmap"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vts-charts"));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn missing_csv_exits_with_code_one() {
    cmd()
        .args(["scatter", "/nonexistent/series.csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Rendering failed"));
}

#[test]
fn heatmap_without_ranges_errors() {
    cmd().args(["heatmap", "grid.csv"]).assert().failure();
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn line_chart_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_file(&dir, "series.csv", "1,4\n2,5\n3,6\n");
    let output = dir.path().join("line.html");

    cmd()
        .arg("line")
        .arg(&data)
        .arg("--no-headers")
        .args(["-t", "Series A", "-o"])
        .arg(&output)
        .assert()
        .success();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("Series A"));
}

#[test]
fn heatmap_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let grid = write_file(&dir, "grid.csv", "1,2\n3,4\n5,6\n");
    let output = dir.path().join("heatmap.html");

    cmd()
        .arg("heatmap")
        .arg(&grid)
        .args(["--x-range", "0:3:4", "--y-range", "0:2:3", "--midpoints", "-o"])
        .arg(&output)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn binary_logs_under_its_own_target() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_file(&dir, "series.csv", "x,y\n1,4\n2,5\n");
    let output = dir.path().join("scatter.html");

    cmd()
        .env("VTS_CHARTS_LOG", "vts_charts_cli=info")
        .arg("scatter")
        .arg(&data)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("vts_charts_cli"))
        .stderr(predicate::str::contains("Rendering Scatter chart"))
        .stderr(predicate::str::contains("Wrote chart").not());
}
