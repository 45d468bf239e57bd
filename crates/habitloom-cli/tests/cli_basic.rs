//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::io::Write;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "habitloom-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Write a fixture file and keep the handle alive for the test's duration.
fn fixture(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create fixture file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write fixture file");
    file
}

#[test]
fn test_windows_normalize_collapses_any() {
    let (stdout, _, code) = run_cli(&["windows", "normalize", "MORNING", "ANY", "EVENING"]);
    assert_eq!(code, 0, "windows normalize failed");
    assert_eq!(stdout.trim(), r#"["ANY"]"#);
}

#[test]
fn test_windows_normalize_empty_defaults_to_any() {
    let (stdout, _, code) = run_cli(&["windows", "normalize"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), r#"["ANY"]"#);
}

#[test]
fn test_windows_normalize_rejects_unknown_names() {
    let (_, stderr, code) = run_cli(&["windows", "normalize", "BRUNCH"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown window"));
}

#[test]
fn test_windows_list() {
    let (stdout, _, code) = run_cli(&["windows", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("EARLY_MORNING"));
    assert!(stdout.contains("ANY"));
}

#[test]
fn test_prefs_resolve_defaults() {
    let (stdout, _, code) = run_cli(&["prefs", "resolve"]);
    assert_eq!(code, 0, "prefs resolve failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["scheduling"]["day_start_minute"], 360);
    assert_eq!(parsed["scheduling"]["day_end_minute"], 1380);
    assert_eq!(parsed["prediction"]["risk_threshold"], 0.8);
    assert_eq!(parsed["simulation"]["enabled"], false);
}

#[test]
fn test_prefs_resolve_merges_partial_json() {
    let file = fixture(r#"{"scheduling": {"day_start_minute": 300}}"#, ".json");
    let (stdout, _, code) = run_cli(&["prefs", "resolve", file.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["scheduling"]["day_start_minute"], 300);
    // Unsupplied fields in the same group keep their defaults.
    assert_eq!(parsed["scheduling"]["granularity_minutes"], 15);
}

#[test]
fn test_prefs_resolve_rejects_out_of_range() {
    let file = fixture(r#"{"prediction": {"risk_threshold": 2.0}}"#, ".json");
    let (_, stderr, code) = run_cli(&["prefs", "resolve", file.path().to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("invalid preferences") || stderr.contains("out of range"));
}

#[test]
fn test_checkin_validate_accepts_consistent_record() {
    let file = fixture(
        r#"{"habit_id": "4f6c3a44-9a88-4f9a-bf0d-2f87b9272b1d",
            "date": "2025-06-01", "success": true, "quality": "GOOD"}"#,
        ".json",
    );
    let (stdout, _, code) = run_cli(&["checkin", "validate", file.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");
}

#[test]
fn test_checkin_validate_rejects_success_without_quality() {
    let file = fixture(
        r#"{"habit_id": "4f6c3a44-9a88-4f9a-bf0d-2f87b9272b1d",
            "date": "2025-06-01", "success": true}"#,
        ".json",
    );
    let (_, stderr, code) = run_cli(&["checkin", "validate", file.path().to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("invalid check-in"));
}

#[test]
fn test_habit_validate_rejects_bad_duration() {
    let file = fixture(
        r#"{"name": "Run", "duration_minutes": 3, "priority": 3, "difficulty": 2}"#,
        ".json",
    );
    let (_, stderr, code) = run_cli(&["habit", "validate", file.path().to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("invalid habit"));
}

#[test]
fn test_habit_show_normalizes_windows() {
    let file = fixture(
        r#"{"name": "Run", "duration_minutes": 30, "priority": 3, "difficulty": 2,
            "preferred_windows": ["EVENING", "ANY"]}"#,
        ".json",
    );
    let (stdout, _, code) = run_cli(&["habit", "show", file.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["preferred_windows"], serde_json::json!(["ANY"]));
}

#[test]
fn test_schedule_check_detects_overlap() {
    let habit_id = "59d1b0a2-41a3-40e2-b0e4-5f0c5ec1a111";
    let user_id = "a4b3c2d1-0000-4000-8000-000000000001";
    let habits = fixture(
        &format!(
            r#"[{{"id": "{habit_id}", "user_id": "{user_id}", "name": "Stretch",
                "duration_minutes": 30, "priority": 3, "difficulty": 2,
                "preferred_windows": ["ANY"],
                "spaced_rep": {{"easiness_factor": 2.5, "interval_days": 1,
                                "repetitions": 0, "streak": 0}},
                "created_at": "2025-06-01T08:00:00Z"}}]"#
        ),
        ".json",
    );
    let schedule = fixture(
        &format!(
            r#"{{"id": "b1b2b3b4-0000-4000-8000-000000000002", "user_id": "{user_id}",
                "date": "2025-06-02",
                "slots": [
                    {{"habit_id": "{habit_id}", "start_minute": 480, "end_minute": 510}},
                    {{"habit_id": "{habit_id}", "start_minute": 495, "end_minute": 525}}
                ],
                "generated_at": "2025-06-02T05:00:00Z"}}"#
        ),
        ".json",
    );

    let (_, stderr, code) = run_cli(&[
        "schedule",
        "check",
        schedule.path().to_str().unwrap(),
        "--habits",
        habits.path().to_str().unwrap(),
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("overlap"));
}

#[test]
fn test_schedule_check_accepts_back_to_back_slots() {
    let habit_id = "59d1b0a2-41a3-40e2-b0e4-5f0c5ec1a111";
    let user_id = "a4b3c2d1-0000-4000-8000-000000000001";
    let habits = fixture(
        &format!(
            r#"[{{"id": "{habit_id}", "user_id": "{user_id}", "name": "Stretch",
                "duration_minutes": 30, "priority": 3, "difficulty": 2,
                "preferred_windows": ["ANY"],
                "spaced_rep": {{"easiness_factor": 2.5, "interval_days": 1,
                                "repetitions": 0, "streak": 0}},
                "created_at": "2025-06-01T08:00:00Z"}}]"#
        ),
        ".json",
    );
    let schedule = fixture(
        &format!(
            r#"{{"id": "b1b2b3b4-0000-4000-8000-000000000002", "user_id": "{user_id}",
                "date": "2025-06-02",
                "slots": [
                    {{"habit_id": "{habit_id}", "start_minute": 480, "end_minute": 510}},
                    {{"habit_id": "{habit_id}", "start_minute": 510, "end_minute": 540}}
                ],
                "generated_at": "2025-06-02T05:00:00Z"}}"#
        ),
        ".json",
    );

    let (stdout, _, code) = run_cli(&[
        "schedule",
        "check",
        schedule.path().to_str().unwrap(),
        "--habits",
        habits.path().to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("ok"));
}
