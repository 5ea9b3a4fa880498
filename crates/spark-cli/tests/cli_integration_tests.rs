//! CLI integration tests for spark
//!
//! Tests the spark CLI commands end-to-end using assert_cmd. Each test gets
//! its own config directory so nothing leaks between tests or into the
//! developer's real config.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a command with an isolated config directory
fn spark_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spark").unwrap();
    cmd.env("SPARK_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn test_agents_list_shows_catalog() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["agents", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email Assistant"))
        .stdout(predicate::str::contains("Travel Planner"))
        .stdout(predicate::str::contains("Finance Manager"))
        .stdout(predicate::str::contains("Social Media Assistant"))
        .stdout(predicate::str::contains("Meeting Scheduler"))
        .stdout(predicate::str::contains("Document Summarizer"));
}

#[test]
fn test_agents_list_category_filter() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["agents", "list", "--category", "travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Travel Planner"))
        .stdout(predicate::str::contains("Email Assistant").not());
}

#[test]
fn test_agents_search_matches_description() {
    let dir = TempDir::new().unwrap();

    // "budgets" appears only in the Finance Manager description
    spark_cmd(&dir)
        .args(["agents", "search", "budgets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Finance Manager"))
        .stdout(predicate::str::contains("Travel Planner").not());
}

#[test]
fn test_agents_search_no_match() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["agents", "search", "blockchain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No agents found."));
}

#[test]
fn test_agents_search_unknown_category_fails() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["agents", "list", "--category", "gaming"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_agents_show() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["agents", "show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Finance Manager"))
        .stdout(predicate::str::contains("FinWizards"));
}

#[test]
fn test_agents_show_not_found() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["agents", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_agents_list_json() {
    let dir = TempDir::new().unwrap();

    let output = spark_cmd(&dir)
        .args(["agents", "list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let agents: serde_json::Value =
        serde_json::from_slice(&output).expect("agents list --format json should emit JSON");
    assert_eq!(agents.as_array().map(|a| a.len()), Some(6));
}

#[test]
fn test_suggest_book_list() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["suggest", "book a trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book a flight to NYC"))
        .stdout(predicate::str::contains("Book a hotel in Paris"))
        .stdout(predicate::str::contains("Book a restaurant for dinner"));
}

#[test]
fn test_suggest_short_query_empty() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["suggest", "bo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions."));
}

#[test]
fn test_run_search_prints_two_results() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["config", "set", "timing.execute_delay_ms", "0"])
        .assert()
        .success();

    spark_cmd(&dir)
        .args(["run", "weather today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search result 1"))
        .stdout(predicate::str::contains("Search result 2"));
}

#[test]
fn test_run_agent_prints_task_result() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["config", "set", "timing.execute_delay_ms", "0"])
        .assert()
        .success();

    spark_cmd(&dir)
        .args(["run", "send an email", "--mode", "agent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email sent successfully."));
}

#[test]
fn test_run_blank_query_is_noop() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["run", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to run"));
}

#[test]
fn test_run_unknown_mode_fails() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["run", "anything", "--mode", "voice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown mode"));
}

#[test]
fn test_profile_shows_history() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Book a flight to NYC"))
        .stdout(predicate::str::contains("In Progress"));
}

#[test]
fn test_submissions_shows_dashboard() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .arg("submissions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Email Assistant"))
        .stdout(predicate::str::contains("[Approved]"))
        .stdout(predicate::str::contains("[Pending]"));
}

#[test]
fn test_submit_complete_form() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args([
            "submit",
            "--name",
            "News Digest",
            "--description",
            "Summarizes the morning headlines",
            "--tasks",
            "Fetch headlines, Summarize",
            "--permission",
            "network",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("pending review"));
}

#[test]
fn test_submit_missing_field_fails() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args([
            "submit",
            "--name",
            "News Digest",
            "--description",
            "",
            "--tasks",
            "Fetch headlines",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("description"));
}

#[test]
fn test_config_set_get_roundtrip() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["config", "get", "ui.dark_mode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));

    spark_cmd(&dir)
        .args(["config", "set", "ui.dark_mode", "true"])
        .assert()
        .success();

    spark_cmd(&dir)
        .args(["config", "get", "ui.dark_mode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn test_config_even_toggle_roundtrips() {
    let dir = TempDir::new().unwrap();

    for _ in 0..2 {
        let current = spark_cmd(&dir)
            .args(["config", "get", "ui.dark_mode"])
            .output()
            .unwrap();
        let flipped = if String::from_utf8_lossy(&current.stdout).trim() == "true" {
            "false"
        } else {
            "true"
        };
        spark_cmd(&dir)
            .args(["config", "set", "ui.dark_mode", flipped])
            .assert()
            .success();
    }

    spark_cmd(&dir)
        .args(["config", "get", "ui.dark_mode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));
}

#[test]
fn test_config_list_and_reset() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["config", "set", "timing.execute_delay_ms", "10"])
        .assert()
        .success();

    spark_cmd(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("timing.execute_delay_ms = 10"));

    spark_cmd(&dir)
        .args(["config", "reset"])
        .assert()
        .success();

    spark_cmd(&dir)
        .args(["config", "get", "timing.execute_delay_ms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1500"));
}

#[test]
fn test_config_path_points_into_config_dir() {
    let dir = TempDir::new().unwrap();

    spark_cmd(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
