//! Integration tests for the CLI interface
//!
//! Tests the binary end to end: argument parsing, output files and exit codes

use assert_cmd::Command;
use predicates::prelude::*;
use route_manager::data::InputPaths;
use route_manager::testing::{Fixtures, TestContext};

fn setup() -> (TestContext, InputPaths) {
    let ctx = TestContext::new().unwrap();
    let inputs = ctx.write_dataset(&Fixtures::canadian_sample()).unwrap();
    (ctx, inputs)
}

fn route_manager(inputs: &InputPaths, question: &str, graph_type: &str) -> Command {
    let mut cmd = Command::cargo_bin("route_manager").unwrap();
    cmd.arg("--airlines")
        .arg(&inputs.airlines)
        .arg("--airports")
        .arg(&inputs.airports)
        .arg("--routes")
        .arg(&inputs.routes)
        .arg("--question")
        .arg(question)
        .arg("--graph-type")
        .arg(graph_type);
    cmd
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("route_manager").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--graph-type"));
}

#[test]
fn test_missing_arguments() {
    let mut cmd = Command::cargo_bin("route_manager").unwrap();
    cmd.arg("--question")
        .arg("q1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_bar_chart_run_writes_csv_and_svg() {
    let (ctx, inputs) = setup();
    let out = ctx.temp_path().join("out");

    route_manager(&inputs, "q3", "bar")
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(out.join("q3.csv")).unwrap();
    assert!(csv.starts_with("subject,statistic\n"));
    assert!(csv.contains("\"Lester B. Pearson International Airport (CYYZ), Toronto, Canada\",6"));

    let svg = std::fs::read_to_string(out.join("q3.svg")).unwrap();
    assert!(svg.contains("Top 10 Destination Airports"));
}

#[test]
fn test_uppercase_argument_spellings() {
    let (ctx, inputs) = setup();

    let mut cmd = Command::cargo_bin("route_manager").unwrap();
    cmd.current_dir(ctx.temp_path())
        .arg(format!("--AIRLINES={}", inputs.airlines.display()))
        .arg(format!("--AIRPORTS={}", inputs.airports.display()))
        .arg(format!("--ROUTES={}", inputs.routes.display()))
        .arg("--QUESTION=q5")
        .arg("--GRAPH_TYPE=pie")
        .assert()
        .success();

    let csv = std::fs::read_to_string(ctx.temp_path().join("q5.csv")).unwrap();
    assert!(csv.contains("CYYC-CYVR,3543"));
    assert!(ctx.temp_path().join("q5.svg").exists());
}

#[test]
fn test_unknown_graph_type_skips_chart() {
    let (ctx, inputs) = setup();
    let out = ctx.temp_path().join("out");

    route_manager(&inputs, "q2", "scatter")
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("q2.csv").exists());
    assert!(!out.join("q2.svg").exists());
}

#[test]
fn test_unknown_question_writes_nothing() {
    let (ctx, inputs) = setup();
    let out = ctx.temp_path().join("out");

    route_manager(&inputs, "q9", "bar")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown question"));

    assert!(!out.exists());
}

#[test]
fn test_malformed_document_exit_code() {
    let (ctx, mut inputs) = setup();
    inputs.airports = ctx.create_test_file("broken.yaml", "airfields: []\n").unwrap();

    route_manager(&inputs, "q1", "bar")
        .current_dir(ctx.temp_path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("airports document is malformed"));
}

#[test]
fn test_missing_input_file_exit_code() {
    let (ctx, mut inputs) = setup();
    inputs.routes = ctx.temp_path().join("absent.yaml");

    route_manager(&inputs, "q1", "bar")
        .current_dir(ctx.temp_path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("absent.yaml"));
}

#[test]
fn test_country_from_config_file() {
    let (ctx, inputs) = setup();
    let config = ctx
        .create_test_file("route_manager.toml", "country = \"Japan\"\noutput_dir = \"reports\"\n")
        .unwrap();

    route_manager(&inputs, "q1", "bar")
        .current_dir(ctx.temp_path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let csv = std::fs::read_to_string(ctx.temp_path().join("reports").join("q1.csv")).unwrap();
    assert_eq!(csv, "subject,statistic\nAll Nippon Airways (ANA),2\n");
}

#[test]
fn test_invalid_config_file_exit_code() {
    let (ctx, inputs) = setup();
    let config = ctx.create_test_file("bad.toml", "country = [").unwrap();

    route_manager(&inputs, "q1", "bar")
        .current_dir(ctx.temp_path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration problem"));
}

#[test]
fn test_verbose_failure_describes_error_code() {
    let (ctx, inputs) = setup();
    let config = ctx.create_test_file("bad.toml", "country = [").unwrap();

    route_manager(&inputs, "q1", "bar")
        .current_dir(ctx.temp_path())
        .arg("--config")
        .arg(&config)
        .arg("-v")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Error code E1002: Configuration file is not valid TOML",
        ));
}
