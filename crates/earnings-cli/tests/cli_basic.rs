//! Basic CLI E2E tests.
//!
//! Each test runs the binary against its own temporary data directory.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_earnings"))
        .args(args)
        .env("EARNINGS_TRACKER_DATA_DIR", data_dir)
        .env_remove("SPOTIFY_ACCESS_TOKEN")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
    stdout
}

#[test]
fn test_config_show_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["config", "show"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["salaryType"], "monthly");
    assert_eq!(json["salaryAmount"], 3150.0);
    assert_eq!(json["workEndHour"], 17);
}

#[test]
fn test_config_set_persists() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["config", "set", "days-per-week", "6"]);
    let out = run_cli_success(dir.path(), &["config", "get", "days-per-week"]);
    assert_eq!(out.trim(), "6");
}

#[test]
fn test_config_set_rejects_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["config", "set", "days-per-week", "8"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Value must be at most 7"), "stderr: {stderr}");

    let out = run_cli_success(dir.path(), &["config", "get", "days-per-week"]);
    assert_eq!(out.trim(), "5");
}

#[test]
fn test_config_set_rejects_empty_window() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["config", "set", "work-end-hour", "8"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("must be after start hour"), "stderr: {stderr}");
}

#[test]
fn test_config_set_rejects_overflowing_salary() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["config", "set", "salary-amount", "1e308"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Value must be at most"), "stderr: {stderr}");

    let out = run_cli_success(dir.path(), &["status", "--json", "--at", "2025-01-15T06:00:00"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["dailyEarnings"].as_f64(), Some(0.0));
    assert!(json["dailyTarget"].as_f64().is_some_and(f64::is_finite));
}

#[test]
fn test_status_json_at_fixed_time() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["status", "--json", "--at", "2025-01-15T12:00:00"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let earned = json["dailyEarnings"].as_f64().unwrap();
    assert!((earned - 64.43).abs() < 0.05, "earned {earned}");
    assert_eq!(json["isWorkingNow"], true);
}

#[test]
fn test_status_human_output() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["prefs", "set", "color", "false"]);
    let out = run_cli_success(dir.path(), &["status", "--at", "2025-01-12T12:00:00"]);
    assert!(out.contains("off hours"));
    assert!(out.contains("R$"));
}

#[test]
fn test_prefs_toggle_theme() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["prefs", "toggle-theme"]);
    assert_eq!(out.trim(), "theme = light");
    let out = run_cli_success(dir.path(), &["prefs", "get", "theme"]);
    assert_eq!(out.trim(), "light");
}

#[test]
fn test_wallpaper_next_then_current() {
    let dir = tempfile::tempdir().unwrap();
    let next = run_cli_success(dir.path(), &["wallpaper", "next"]);
    let current = run_cli_success(dir.path(), &["wallpaper", "current"]);
    assert_eq!(next, current);
}

#[test]
fn test_now_playing_without_token_is_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["now-playing", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["state"], "disabled");
}
