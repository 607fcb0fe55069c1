use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn base_command(data_dir: &Path, today: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_weekplan"));
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("WEEKPLAN_DIR")
        .env_remove("WEEKPLAN_TODAY")
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--today", today]);
    cmd
}

fn weekplan(data_dir: &Path, today: &str) -> Command {
    let mut cmd = base_command(data_dir, today);
    cmd.args(["--format", "json"]);
    cmd
}

fn run_json(data_dir: &Path, today: &str, args: &[&str]) -> Value {
    let output = weekplan(data_dir, today).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "weekplan {:?} failed\nstdout:\n{}\nstderr:\n{}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("output should be valid json")
}

fn add(data_dir: &Path, today: &str, date: &str, title: &str, priority: &str) -> String {
    let task = run_json(data_dir, today, &["add", date, title, "--priority", priority]);
    task["id"].as_str().expect("id should be a string").to_string()
}

#[test]
fn add_then_week_shows_task_and_stats() {
    let dir = tempdir().unwrap();
    let task = run_json(
        dir.path(),
        "2024-06-10",
        &["add", "2024-06-10", "Write report", "-p", "high", "-d", "Q2"],
    );
    assert_eq!(task["title"], "Write report");
    assert_eq!(task["date"], "2024-06-10");
    assert_eq!(task["priority"], "high");
    assert_eq!(task["completed"], false);
    assert_eq!(task["rolledOver"], false);
    assert_eq!(task["description"], "Q2");

    let week = run_json(dir.path(), "2024-06-10", &["week"]);
    assert_eq!(
        week["range"],
        "This Week: Jun 9, 2024 - Jun 15, 2024 | Next Week: Jun 16, 2024 - Jun 22, 2024"
    );
    assert_eq!(week["filter"], "weekdays");
    assert_eq!(week["stats"]["total"], 1);
    let columns = week["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 10);
    let monday = &columns[0];
    assert_eq!(monday["date"], "2024-06-10");
    assert_eq!(monday["isToday"], true);
    assert_eq!(monday["tasks"][0]["title"], "Write report");
}

#[test]
fn toggle_accepts_id_prefix() {
    let dir = tempdir().unwrap();
    let id = add(dir.path(), "2024-06-10", "2024-06-11", "Ship it", "medium");

    let change = run_json(dir.path(), "2024-06-10", &["toggle", &id[..8]]);
    assert_eq!(change["taskId"], id.as_str());
    assert_eq!(change["stats"]["completed"], 1);

    let shown = run_json(dir.path(), "2024-06-10", &["show", id.as_str()]);
    assert_eq!(shown["completed"], true);
}

#[test]
fn move_to_same_day_reports_no_change_and_leaves_file_alone() {
    let dir = tempdir().unwrap();
    let id = add(dir.path(), "2024-06-10", "2024-06-12", "Pinned", "low");
    let before = fs::read_to_string(dir.path().join("tasks.json")).unwrap();

    let result = run_json(dir.path(), "2024-06-10", &["move", id.as_str(), "2024-06-12"]);
    assert_eq!(result["changed"], false);
    assert_eq!(
        fs::read_to_string(dir.path().join("tasks.json")).unwrap(),
        before
    );

    let moved = run_json(dir.path(), "2024-06-10", &["move", id.as_str(), "2024-06-13"]);
    assert_eq!(moved["dates"], serde_json::json!(["2024-06-12", "2024-06-13"]));
}

#[test]
fn delete_unknown_id_is_not_an_error() {
    let dir = tempdir().unwrap();
    add(dir.path(), "2024-06-10", "2024-06-12", "Keep me", "low");

    let result = run_json(dir.path(), "2024-06-10", &["delete", "does-not-exist", "--yes"]);
    assert_eq!(result["changed"], false);

    let day = run_json(dir.path(), "2024-06-10", &["day", "2024-06-12"]);
    assert_eq!(day.as_array().unwrap().len(), 1);
}

#[test]
fn delete_asks_for_confirmation() {
    let dir = tempdir().unwrap();
    let id = add(dir.path(), "2024-06-10", "2024-06-12", "Doomed", "low");

    weekplan(dir.path(), "2024-06-10")
        .args(["delete", id.as_str()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""changed":false"#))
        .stderr(predicate::str::contains("Delete task 'Doomed'?"));

    weekplan(dir.path(), "2024-06-10")
        .args(["delete", id.as_str()])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()));

    let day = run_json(dir.path(), "2024-06-10", &["day", "2024-06-12"]);
    assert!(day.as_array().unwrap().is_empty());
}

#[test]
fn empty_title_is_a_validation_error() {
    let dir = tempdir().unwrap();
    let output = weekplan(dir.path(), "2024-06-10")
        .args(["add", "2024-06-10", "   "])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let envelope: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"], "empty_title");
    assert!(envelope["message"].is_string());
    assert!(!dir.path().join("tasks.json").exists());
}

#[test]
fn invalid_date_is_rejected() {
    let dir = tempdir().unwrap();
    weekplan(dir.path(), "2024-06-10")
        .args(["add", "2024-02-30", "Leap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn rollover_runs_on_load_and_only_once() {
    let dir = tempdir().unwrap();
    let id = add(dir.path(), "2024-06-05", "2024-06-07", "Friday task", "medium");

    let moved = run_json(dir.path(), "2024-06-10", &["rollover"]);
    let moved = moved.as_array().unwrap();
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0]["id"], id.as_str());
    assert_eq!(moved[0]["from"], "2024-06-07");
    assert_eq!(moved[0]["to"], "2024-06-10");

    let shown = run_json(dir.path(), "2024-06-10", &["show", id.as_str()]);
    assert_eq!(shown["rolledOver"], true);
    assert_eq!(shown["date"], "2024-06-10");

    let again = run_json(dir.path(), "2024-06-10", &["rollover"]);
    assert!(again.as_array().unwrap().is_empty());
}

#[test]
fn navigation_stops_at_current_week() {
    let dir = tempdir().unwrap();

    let output = weekplan(dir.path(), "2024-06-12")
        .arg("prev")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already at the current week"));

    let next = run_json(dir.path(), "2024-06-12", &["next"]);
    assert!(next["range"].as_str().unwrap().starts_with("This Week: Jun 16, 2024"));

    // The pointer survives between invocations until `today` resets it.
    let week = run_json(dir.path(), "2024-06-12", &["week"]);
    assert_eq!(week["range"], next["range"]);
    let reset = run_json(dir.path(), "2024-06-12", &["today"]);
    assert!(reset["range"].as_str().unwrap().starts_with("This Week: Jun 9, 2024"));
}

#[test]
fn filter_all_shows_weekend_columns_and_persists() {
    let dir = tempdir().unwrap();
    add(dir.path(), "2024-06-10", "2024-06-15", "Saturday chores", "low");

    let hidden = run_json(dir.path(), "2024-06-10", &["day", "2024-06-15"]);
    assert!(hidden.as_array().unwrap().is_empty());

    let board = run_json(dir.path(), "2024-06-10", &["filter", "all"]);
    assert_eq!(board["filter"], "all");
    assert_eq!(board["columns"].as_array().unwrap().len(), 14);

    let visible = run_json(dir.path(), "2024-06-10", &["day", "2024-06-15"]);
    assert_eq!(visible.as_array().unwrap().len(), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("view_filter.json")).unwrap(),
        r#""all""#
    );
}

#[test]
fn corrupt_state_degrades_to_empty_board() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tasks.json"), "not json at all").unwrap();
    fs::write(dir.path().join("view_filter.json"), "42").unwrap();

    let week = run_json(dir.path(), "2024-06-10", &["week"]);
    assert_eq!(week["stats"]["total"], 0);
    assert_eq!(week["filter"], "weekdays");
}

#[test]
fn show_unknown_task_reports_not_found() {
    let dir = tempdir().unwrap();
    let output = weekplan(dir.path(), "2024-06-10")
        .args(["show", "ffffffff"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let envelope: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"], "task_not_found");
}

#[test]
fn dark_mode_toggles_and_pretty_output_renders() {
    let dir = tempdir().unwrap();
    let on = run_json(dir.path(), "2024-06-10", &["dark-mode"]);
    assert_eq!(on["darkMode"], true);
    add(dir.path(), "2024-06-10", "2024-06-10", "Pretty task", "high");

    base_command(dir.path(), "2024-06-10")
        .args(["--format", "pretty", "week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== This Week =="))
        .stdout(predicate::str::contains("Monday Jun 10, 2024 (today)"))
        .stdout(predicate::str::contains("high Pretty task"))
        .stdout(predicate::str::contains("0 / 1 tasks completed"));

    let off = run_json(dir.path(), "2024-06-10", &["dark-mode"]);
    assert_eq!(off["darkMode"], false);
}

#[test]
fn out_of_range_week_pointer_falls_back_to_current_week() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("week_start.json"), r#""+262142-12-26""#).unwrap();

    let week = run_json(dir.path(), "2024-06-10", &["week"]);
    assert!(week["range"].as_str().unwrap().starts_with("This Week: Jun 9, 2024"));
}

#[test]
fn duplicate_stored_ids_become_addressable() {
    let dir = tempdir().unwrap();
    let stored = r#"[
        {"id": "1718000000000", "title": "A", "date": "2024-06-11", "createdAt": "2024-06-10T09:00:00Z"},
        {"id": "1718000000000", "title": "B", "date": "2024-06-12", "createdAt": "2024-06-10T09:00:00Z"}
    ]"#;
    fs::write(dir.path().join("tasks.json"), stored).unwrap();

    let first = run_json(dir.path(), "2024-06-10", &["toggle", "1718000000000"]);
    assert_eq!(first["taskId"], "1718000000000");
    assert_eq!(first["dates"], serde_json::json!(["2024-06-11"]));

    let day = run_json(dir.path(), "2024-06-10", &["day", "2024-06-12"]);
    let b_id = day[0]["id"].as_str().unwrap().to_string();
    assert_ne!(b_id, "1718000000000");
    assert_eq!(day[0]["title"], "B");

    let second = run_json(dir.path(), "2024-06-10", &["toggle", b_id.as_str()]);
    assert_eq!(second["stats"]["completed"], 2);
}
