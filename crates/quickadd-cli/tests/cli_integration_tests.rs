/// CLI integration tests for quickadd
///
/// These run the binary as a black box with a fixed `--now`, an isolated
/// working directory and no credentials unless a test sets them.

use predicates::prelude::*;
use serde_json::Value;

mod helpers;
use helpers::{assertions, CliTestHarness, NOW};

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_cli_help_and_version() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["--help"])
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("parse"));

    harness
        .run_success(&["--version"])
        .stdout(predicate::str::contains("quickadd"));

    harness
        .run_failure(&["invalid-command"])
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_parse_table() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["parse", "Buy milk tomorrow", "write report", "--now", NOW])
        .stdout(assertions::has_parse_table_headers())
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("2025-06-11"))
        .stdout(predicate::str::contains("tomorrow"))
        .stdout(predicate::str::contains("write report"));
}

#[test]
fn test_parse_json() {
    let harness = CliTestHarness::new();

    let output = harness
        .run_success(&["parse", "--json", "--now", NOW, "call mom next friday", "Team sync 6/15"])
        .get_output()
        .clone();
    let json = stdout_json(&output);

    assert_eq!(json[0]["title"], "call mom");
    assert_eq!(json[0]["date"], "2025-06-13T09:30:00");
    assert_eq!(json[0]["rule"], "weekday");

    assert_eq!(json[1]["title"], "Team sync");
    assert_eq!(json[1]["date"], "2026-03-06T00:00:00");
    assert_eq!(json[1]["rule"], "numeric_day_month");
}

#[test]
fn test_parse_without_credentials() {
    // Parsing never needs the API, so a missing token is not an error.
    CliTestHarness::new()
        .run_success(&["parse", "pay rent in 3 days", "--now", NOW])
        .stdout(predicate::str::contains("2025-06-13"));
}

#[test]
fn test_parse_requires_input() {
    CliTestHarness::new().run_failure(&["parse"]);
}

#[test]
fn test_parse_rejects_bad_reference_time() {
    CliTestHarness::new()
        .run_failure(&["parse", "today", "--now", "yesterday"])
        .stderr(predicate::str::contains("Invalid reference time"));
}

#[test]
fn test_add_dry_run_payload() {
    let harness = CliTestHarness::new().with_env("QUICKADD_AREA_ID", "area-1");

    let output = harness
        .run_success(&["add", "Buy", "milk", "tomorrow", "-d", "2 litres", "--dry-run", "--now", NOW])
        .get_output()
        .clone();
    let json = stdout_json(&output);

    assert_eq!(json["name"], "Buy milk");
    assert_eq!(json["description"], "2 litres");
    assert_eq!(json["area_id"], "area-1");
    assert_eq!(json["source"], "quickadd");
    assert_eq!(json["scheduled_on"], "2025-06-11");
    assert!(json["source_id"].as_str().is_some_and(|id| id.contains('-')));
}

#[test]
fn test_add_dry_run_without_date() {
    let harness = CliTestHarness::new().with_env("QUICKADD_AREA_ID", "area-1");

    let output = harness
        .run_success(&["add", "write report", "--dry-run", "--now", NOW])
        .get_output()
        .clone();
    let json = stdout_json(&output);

    assert_eq!(json["name"], "write report");
    assert!(json.get("scheduled_on").is_none());
    assert_eq!(json["description"], Value::Null);
}

#[test]
fn test_add_reads_config_file() {
    let harness = CliTestHarness::new().with_config_file("area_id = \"area-from-file\"\n");

    harness
        .run_success(&["add", "renew passport on 1 jan", "--dry-run", "--now", NOW])
        .stdout(predicate::str::contains("area-from-file"))
        .stdout(predicate::str::contains("2026-01-01"));
}

#[test]
fn test_malformed_config_file_is_reported() {
    let harness = CliTestHarness::new()
        .with_env("QUICKADD_API_TOKEN", "secret")
        .with_config_file("area_id = \"unterminated\n");

    harness
        .run_failure(&["add", "Buy milk", "--now", NOW])
        .stderr(assertions::has_error())
        .stderr(predicate::str::contains("Invalid configuration"))
        .stderr(predicate::str::contains("API token required").not());
}

#[test]
fn test_add_requires_token() {
    CliTestHarness::new()
        .with_env("QUICKADD_AREA_ID", "area-1")
        .run_failure(&["add", "Buy milk", "--now", NOW])
        .stderr(assertions::has_error())
        .stderr(predicate::str::contains("API token required"));
}

#[test]
fn test_add_requires_area() {
    CliTestHarness::new()
        .with_env("QUICKADD_API_TOKEN", "secret")
        .run_failure(&["add", "Buy milk", "--now", NOW])
        .stderr(predicate::str::contains("Area ID required"));
}

#[test]
fn test_add_requires_task_name() {
    CliTestHarness::new()
        .with_env("QUICKADD_AREA_ID", "area-1")
        .run_failure(&["add", "   ", "--dry-run", "--now", NOW])
        .stderr(predicate::str::contains("Task name is required"));
}

#[test]
fn test_add_reports_unreachable_api() {
    CliTestHarness::new()
        .with_env("QUICKADD_API_TOKEN", "secret")
        .with_env("QUICKADD_AREA_ID", "area-1")
        .with_env("QUICKADD_API_URL", "http://127.0.0.1:1/v1")
        .run_failure(&["add", "Buy milk tomorrow", "--now", NOW])
        .stderr(predicate::str::contains("HTTP error"));
}
