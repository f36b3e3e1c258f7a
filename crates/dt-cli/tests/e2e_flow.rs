//! End-to-end integration tests for the complete tracking flow.
//!
//! Drives the compiled binary: add → list → report, practice completion,
//! and the timer lifecycle, against a temp-dir database selected via
//! `DT_DATABASE_PATH`.

use std::process::Command;
use std::time::Duration;

use tempfile::TempDir;

fn dt_binary() -> String {
    env!("CARGO_BIN_EXE_dt").to_string()
}

fn dt(temp: &TempDir, args: &[&str]) -> String {
    let output = Command::new(dt_binary())
        .env("DT_DATABASE_PATH", temp.path().join("devtrack.db"))
        .args(args)
        .output()
        .expect("failed to run dt");
    assert!(
        output.status.success(),
        "dt {args:?} should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn add_list_report_flow() {
    let temp = TempDir::new().unwrap();

    dt(
        &temp,
        &[
            "add",
            "--title",
            "Graph practice",
            "--category",
            "dsa",
            "--time",
            "60",
            "--problems",
            "3",
            "--date",
            "2025-06-01",
        ],
    );
    dt(
        &temp,
        &[
            "add",
            "--title",
            "Reading",
            "--category",
            "learning",
            "--time",
            "30",
            "--date",
            "2025-06-01",
        ],
    );

    let list = dt(&temp, &["list", "--json"]);
    let entries: serde_json::Value = serde_json::from_str(&list).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 2);

    let report = dt(&temp, &["report", "--json"]);
    let report: serde_json::Value = serde_json::from_str(&report).unwrap();
    let daily = report["daily_problems"].as_array().unwrap();
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0]["problems"], 3);
    assert_eq!(report["categories"].as_array().unwrap().len(), 2);
}

#[test]
fn add_rejects_invalid_category() {
    let temp = TempDir::new().unwrap();
    let output = Command::new(dt_binary())
        .env("DT_DATABASE_PATH", temp.path().join("devtrack.db"))
        .args([
            "add",
            "--title",
            "Bad",
            "--category",
            "gaming",
            "--time",
            "10",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("unknown category"),
        "stderr should name the bad category"
    );
}

#[test]
fn edit_and_delete_by_id() {
    let temp = TempDir::new().unwrap();
    dt(
        &temp,
        &[
            "add",
            "--title",
            "Session",
            "--category",
            "dsa",
            "--time",
            "30",
        ],
    );

    let list = dt(&temp, &["list", "--json"]);
    let entries: serde_json::Value = serde_json::from_str(&list).unwrap();
    let id = entries[0]["id"].as_str().unwrap().to_string();

    let output = dt(&temp, &["edit", &id, "--problems", "7"]);
    assert!(output.contains("Updated"));

    let list = dt(&temp, &["list", "--json"]);
    let entries: serde_json::Value = serde_json::from_str(&list).unwrap();
    assert_eq!(entries[0]["problems_solved"], 7);

    let output = dt(&temp, &["delete", &id]);
    assert!(output.contains("Deleted"));

    let output = dt(&temp, &["delete", &id]);
    assert!(output.contains("Entry not found"));
}

#[test]
fn practice_done_logs_entry_once() {
    let temp = TempDir::new().unwrap();

    let output = dt(&temp, &["practice", "done", "1"]);
    assert!(output.contains("Two Sum"));

    let output = dt(&temp, &["practice", "done", "1"]);
    assert!(output.contains("already completed"));

    let list = dt(&temp, &["list", "--json"]);
    let entries: serde_json::Value = serde_json::from_str(&list).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 1);
    assert_eq!(entries[0]["title"], "Solved: Two Sum");
    assert_eq!(entries[0]["category"], "DSA");
}

#[test]
fn practice_next_suggests_at_most_six() {
    let temp = TempDir::new().unwrap();
    let output = dt(&temp, &["practice", "next", "--difficulty", "hard"]);
    let suggested = output.lines().filter(|l| l.starts_with('#')).count();
    assert!(suggested >= 1 && suggested <= 6);
    for line in output.lines().filter(|l| l.starts_with('#')) {
        assert!(line.contains("[Hard]"));
    }
}

#[test]
fn timer_lifecycle_saves_a_session() {
    let temp = TempDir::new().unwrap();

    let output = dt(&temp, &["timer", "start"]);
    assert!(output.contains("Started"));

    // Accumulate at least one wall-clock second across invocations
    std::thread::sleep(Duration::from_millis(1_200));

    let output = dt(&temp, &["timer", "pause"]);
    assert!(output.contains("Paused"));

    let output = dt(&temp, &["timer", "save"]);
    assert!(output.contains("Saved"));

    let list = dt(&temp, &["list", "--json"]);
    let entries: serde_json::Value = serde_json::from_str(&list).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 1);
    assert_eq!(entries[0]["title"], "Coding Session");
    assert_eq!(entries[0]["problems_solved"], 0);
}

#[test]
fn reset_requires_confirmation_then_wipes() {
    let temp = TempDir::new().unwrap();
    dt(
        &temp,
        &[
            "add",
            "--title",
            "Session",
            "--category",
            "dsa",
            "--time",
            "30",
        ],
    );

    let output = dt(&temp, &["reset"]);
    assert!(output.contains("--yes"));
    let list = dt(&temp, &["list", "--json"]);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&list)
            .unwrap()
            .as_array()
            .unwrap()
            .len(),
        1
    );

    let output = dt(&temp, &["reset", "--yes"]);
    assert!(output.contains("All data reset"));
    let output = dt(&temp, &["list"]);
    assert!(output.contains("No entries."));
}
