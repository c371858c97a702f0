//! Integration tests for the stride CLI binary.
//!
//! These tests verify end-to-end behavior including:
//! - Workout logging and accumulation
//! - Goal editing and the one-shot achievement notification
//! - Progress reset semantics
//! - Profile editing and CSV export

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("stride"))
}

/// Helper running one subcommand against a data dir
fn run(data_dir: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cli();
    cmd.arg("--data-dir").arg(data_dir);
    cmd.args(args);
    cmd.assert()
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal fitness tracker"));
}

#[test]
fn test_log_creates_state_file() {
    let temp_dir = setup_test_dir();

    run(temp_dir.path(), &["log", "running", "30"])
        .success()
        .stdout(predicate::str::contains("Logged 30 min running"));

    assert!(temp_dir.path().join("state.json").exists());
}

#[test]
fn test_log_accumulates_per_activity() {
    let temp_dir = setup_test_dir();

    // Default profile: 70 kg, 0.75 m stride.
    // walking 30 min = round(4.5 * 70 * 0.5) = 158 kcal, 3.0 km, 4000 steps
    run(temp_dir.path(), &["log", "walking", "30"]).success();
    run(temp_dir.path(), &["log", "walking", "30"]).success();

    run(temp_dir.path(), &["status"])
        .success()
        .stdout(predicate::str::contains("316 / 500"))
        .stdout(predicate::str::contains("8000 steps"))
        .stdout(predicate::str::contains("Totals: 60 min"));
}

#[test]
fn test_estimate_does_not_persist() {
    let temp_dir = setup_test_dir();

    run(temp_dir.path(), &["estimate", "running", "60"])
        .success()
        .stdout(predicate::str::contains("770 kcal"))
        .stdout(predicate::str::contains("14667 steps"));

    assert!(!temp_dir.path().join("state.json").exists());
}

#[test]
fn test_goal_achieved_notification_fires_once() {
    let temp_dir = setup_test_dir();

    run(temp_dir.path(), &["goal", "500"]).success();

    // running 60 min on the default profile burns 770 kcal
    run(temp_dir.path(), &["log", "running", "60"])
        .success()
        .stdout(predicate::str::contains("Daily goal achieved"));

    // Still above goal, but already acknowledged
    run(temp_dir.path(), &["log", "running", "60"])
        .success()
        .stdout(predicate::str::contains("Daily goal achieved").not());
}

#[test]
fn test_goal_edit_rearms_notification() {
    let temp_dir = setup_test_dir();

    run(temp_dir.path(), &["log", "running", "60"])
        .success()
        .stdout(predicate::str::contains("Daily goal achieved"));

    // Editing the goal re-arms it; 770 kcal already logged, so the check
    // fires again immediately after the edit.
    run(temp_dir.path(), &["goal", "600"])
        .success()
        .stdout(predicate::str::contains("Daily goal achieved"));
}

#[test]
fn test_goal_clamped_to_minimum() {
    let temp_dir = setup_test_dir();

    run(temp_dir.path(), &["goal", "10"])
        .success()
        .stdout(predicate::str::contains("Daily goal set to 50 kcal"));
}

#[test]
fn test_reset_zeroes_progress_but_keeps_history() {
    let temp_dir = setup_test_dir();

    run(temp_dir.path(), &["log", "cycling", "60"]).success();
    run(temp_dir.path(), &["reset"]).success();

    run(temp_dir.path(), &["status"])
        .success()
        .stdout(predicate::str::contains("0 / 500"));

    run(temp_dir.path(), &["history"])
        .success()
        .stdout(predicate::str::contains("cycling"));
}

#[test]
fn test_history_limit() {
    let temp_dir = setup_test_dir();

    run(temp_dir.path(), &["log", "walking", "10"]).success();
    run(temp_dir.path(), &["log", "swimming", "10"]).success();
    run(temp_dir.path(), &["log", "skating", "10"]).success();

    run(temp_dir.path(), &["history", "--limit", "1"])
        .success()
        .stdout(predicate::str::contains("skating"))
        .stdout(predicate::str::contains("walking").not());
}

#[test]
fn test_profile_edit_changes_estimates() {
    let temp_dir = setup_test_dir();

    run(temp_dir.path(), &["profile", "--weight-kg", "80"])
        .success()
        .stdout(predicate::str::contains("Weight: 80 kg"));

    run(temp_dir.path(), &["estimate", "running", "60"])
        .success()
        .stdout(predicate::str::contains("880 kcal")); // 11.0 * 80
}

#[test]
fn test_profile_show_defaults() {
    let temp_dir = setup_test_dir();

    run(temp_dir.path(), &["profile"])
        .success()
        .stdout(predicate::str::contains("Name:   You"))
        .stdout(predicate::str::contains("Stride: 0.75 m"));
}

#[test]
fn test_profile_rejects_zero_stride() {
    let temp_dir = setup_test_dir();

    run(temp_dir.path(), &["profile", "--stride-m", "0"])
        .failure()
        .stderr(predicate::str::contains("stride length must be greater than 0"));
}

#[test]
fn test_unknown_workout_type_is_rejected() {
    let temp_dir = setup_test_dir();

    run(temp_dir.path(), &["log", "juggling", "10"])
        .failure()
        .stderr(predicate::str::contains("unknown workout type"));
}

#[test]
fn test_zero_minutes_is_rejected() {
    let temp_dir = setup_test_dir();

    run(temp_dir.path(), &["log", "running", "0"]).failure();
}

#[test]
fn test_export_writes_csv() {
    let temp_dir = setup_test_dir();
    let csv_path = temp_dir.path().join("history.csv");

    run(temp_dir.path(), &["log", "running", "30"]).success();
    run(
        temp_dir.path(),
        &["export", csv_path.to_str().unwrap()],
    )
    .success()
    .stdout(predicate::str::contains("Exported 1 workouts"));

    let contents = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert!(contents.starts_with("recorded_at,workout,minutes,calories,distance_km,steps"));
    assert!(contents.contains("running"));
}

#[test]
fn test_weight_update_after_large_deficit() {
    let temp_dir = setup_test_dir();

    // running at 70 kg burns 770 kcal/h; 11 hours = 8470 kcal > 7700
    run(temp_dir.path(), &["log", "running", "660"])
        .success()
        .stdout(predicate::str::contains("Weight update: 70 kg → 69 kg"));

    run(temp_dir.path(), &["profile"])
        .success()
        .stdout(predicate::str::contains("Weight: 69 kg"));
}
