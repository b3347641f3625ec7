//! End-to-end tests running the `courtside` binary.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn courtside(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("courtside").expect("binary should build");
    cmd.env("COURTSIDE_DB_PATH", temp_dir.path().join("courtside.db"))
        .env_remove("GOOGLE_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_parse_from_argument() {
    let temp_dir = TempDir::new().expect("temp dir");
    courtside(&temp_dir)
        .args(["parse", "Try 3 sets of 20 left-hand dribbles with cones."])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Left Hand Dribbles Cones (3 sets, 20 reps)",
        ));
}

#[test]
fn test_segments_from_stdin() {
    let temp_dir = TempDir::new().expect("temp dir");
    courtside(&temp_dir)
        .arg("segments")
        .write_stdin("Great work.\r\nDo 4 sets of 10 reps.\nRest 1 to 2 minutes.")
        .assert()
        .success()
        .stdout("Do 4 sets of 10 reps\nRest 1 to 2 minutes\n");
}

#[test]
fn test_parse_json_output() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = courtside(&temp_dir)
        .args(["--format", "json", "parse", "hold for 1 to 2 minutes"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value[0]["time"], "1-2 minutes");
    assert_eq!(value[0]["source"], "hold for 1 to 2 minutes");
}

#[test]
fn test_status_before_init_fails() {
    let temp_dir = TempDir::new().expect("temp dir");
    courtside(&temp_dir)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("courtside init"));
}

#[test]
fn test_json_errors_go_to_stdout() {
    let temp_dir = TempDir::new().expect("temp dir");
    courtside(&temp_dir)
        .args(["--format", "json", "history"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\""));
}

#[test]
fn test_conversation_flow() {
    let temp_dir = TempDir::new().expect("temp dir");

    courtside(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the court!"));

    courtside(&temp_dir)
        .args(["topic", "physique"])
        .assert()
        .success()
        .stdout("You selected: Physique Training\n");

    courtside(&temp_dir)
        .args(["chat", "Upper body plan?"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("⚠️ Error:"));

    courtside(&temp_dir)
        .args(["add", "assistant"])
        .write_stdin("Push-ups: 4 sets of 12 reps\nPlank for 45 seconds")
        .assert()
        .success()
        .stdout("Added assistant message 3\n");

    courtside(&temp_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Message 3\n  Tip 1: Push-ups (4 sets, 12 reps)"))
        .stdout(predicate::str::contains("Tip 2: Plank (45 seconds)"));

    courtside(&temp_dir)
        .args(["reset", "-y"])
        .assert()
        .success();

    courtside(&temp_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[  0] assistant Welcome to the court!"));
}
