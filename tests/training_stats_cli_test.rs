// ABOUTME: Integration tests for the training-stats binary
// ABOUTME: Tests default packages, single package input, output formats, and failures

//! Integration tests for the training-stats binary.
//!
//! These tests verify help output, printed summaries, and error exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::Command;

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    run_cli_with_rust_log(args, None)
}

/// Run the CLI with `RUST_LOG` set to `rust_log`, or unset when `None`
fn run_cli_with_rust_log(args: &[&str], rust_log: Option<&str>) -> (i32, String, String) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_training-stats"));
    command.args(args).env_remove("TRAINING_OUTPUT_FORMAT");
    match rust_log {
        Some(directives) => command.env("RUST_LOG", directives),
        None => command.env_remove("RUST_LOG"),
    };
    let output = command.output().unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_cli_help_mentions_options() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    assert!(stdout.contains("--type"), "Help should mention --type");
    assert!(stdout.contains("--data"), "Help should mention --data");
    assert!(stdout.contains("--format"), "Help should mention --format");
}

#[test]
fn test_cli_default_packages() {
    let (exit_code, stdout, _stderr) = run_cli(&[]);

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "one summary per reference package: {stdout}");
    assert!(lines[0].starts_with("Тип тренировки: Swimming;"));
    assert!(lines[1].starts_with("Тип тренировки: Running;"));
    assert!(lines[2].starts_with("Тип тренировки: SportsWalking;"));
    assert!(lines[1].ends_with("Потрачено ккал: 699.750."));
}

#[test]
fn test_cli_single_package_json() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "--type", "SWM", "--data", "720", "1", "80", "25", "40", "--format", "json",
    ]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["training_type"], "Swimming");
    assert!((value["calories"].as_f64().unwrap() - 336.0).abs() < 1e-6);
}

#[test]
fn test_cli_unsupported_type_fails() {
    let (exit_code, stdout, stderr) = run_cli(&["--type", "SWM", "--data", "720", "1", "80"]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("SWM") && stderr.contains("RUN") && stderr.contains("WLK"));
}

#[test]
fn test_cli_data_requires_type() {
    let (exit_code, _stdout, _stderr) = run_cli(&["--data", "1", "2", "3"]);
    assert_ne!(exit_code, 0);
}

#[test]
fn test_cli_verbose_logs_statistics() {
    let (exit_code, stdout, stderr) = run_cli(&["-v", "--type", "RUN", "--data", "15000", "1", "75"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("Тип тренировки: Running;"));
    assert!(stderr.contains("Training statistics computed"), "stderr: {stderr}");
}

#[test]
fn test_cli_verbose_overrides_rust_log() {
    let args = ["-v", "--type", "RUN", "--data", "15000", "1", "75"];

    let (exit_code, _stdout, stderr) = run_cli_with_rust_log(&args, Some("warn"));
    assert_eq!(exit_code, 0);
    assert!(stderr.contains("Training statistics computed"), "stderr: {stderr}");

    let (_exit_code, _stdout, quiet_stderr) = run_cli_with_rust_log(&args[1..], Some("warn"));
    assert!(!quiet_stderr.contains("Training statistics computed"));
}
