//! Tests for the `tcx2kmz` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn tcx2kmz() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tcx2kmz"))
}

#[test]
fn test_convert_to_stdout() {
    tcx2kmz()
        .arg("convert")
        .arg(fixture_path("run.tcx"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<kml"))
        .stdout(predicate::str::contains("<gx:coord>7.25 46.5 512.5</gx:coord>"));
}

#[test]
fn test_convert_from_stdin_compact() {
    let input = fs::read_to_string(fixture_path("run.tcx")).unwrap();

    tcx2kmz()
        .args(["convert", "-", "--compact"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("<kml").and(predicate::str::contains("\n").not()));
}

#[test]
fn test_convert_yaml_to_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("run.yaml");

    tcx2kmz()
        .arg("convert")
        .arg(fixture_path("run.tcx"))
        .arg("--output")
        .arg(&output)
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Saved to:"));

    let yaml = fs::read_to_string(&output).unwrap();
    assert!(yaml.starts_with("---\n"));
    assert!(yaml.contains("sport: Running"));
}

#[test]
fn test_summary() {
    tcx2kmz()
        .arg("summary")
        .arg(fixture_path("run.tcx"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Forerunner 405"))
        .stdout(predicate::str::contains("Trackpoints: 4"));
}

#[test]
fn test_missing_input() {
    tcx2kmz()
        .args(["convert", "does-not-exist.tcx"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: IO error: Input file does not exist"));
}

#[test]
fn test_conversion_error() {
    tcx2kmz()
        .arg("convert")
        .arg(fixture_path("bad_heart_rate.tcx"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Cannot convert <Value>"))
        .stdout(predicate::str::is_empty());
}
