//! Drives the `triad` binary against the extraction fixtures.

use std::path::PathBuf;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../triad-extract/tests/fixtures")
}

fn triad(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_triad"))
        .args(args)
        .env_remove("TRIAD_LOG")
        .output()
        .expect("triad binary should run")
}

fn fixture_arg() -> String {
    fixtures().display().to_string()
}

#[test]
fn analyze_json_reports_units_and_stats() {
    let out = triad(&["--format", "json", "analyze", "--offline", &fixture_arg()]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(value["stats"]["artifacts"], 3);
    assert!(value["stats"]["claims"].as_u64().unwrap_or_default() > 0);
    assert!(value["display"]["behavioral_units"].is_array());
}

#[test]
fn analyze_text_is_deterministic() {
    let first = triad(&["analyze", "--offline", &fixture_arg()]);
    let second = triad(&["analyze", "--offline", &fixture_arg()]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn claims_json_carries_rejection_trail() {
    let out = triad(&["claims", "--offline", "--format", "json", &fixture_arg()]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert!(value["evidence"].is_array());
    assert!(value["claims"].is_array());
    assert!(value["rejections"].is_array());
}

#[test]
fn missing_path_fails_with_message() {
    let out = triad(&["analyze", "--offline", "/definitely/not/here"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("triad error:"), "stderr: {stderr}");
    assert!(stderr.contains("path does not exist"), "stderr: {stderr}");
}

#[test]
fn schema_is_valid_json_schema() {
    let out = triad(&["--format", "json", "schema"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(value["title"], "ProcessResult");
}
