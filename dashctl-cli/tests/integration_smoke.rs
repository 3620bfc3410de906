//! Smoke tests for the dashctl binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{Builder, NamedTempFile, TempDir};

fn dashctl(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dashctl").unwrap();
    // Keep the user's ~/.dashctl out of the tests
    cmd.env("DASHCTL_CONFIG", config_dir.path().join("config.toml"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn definition(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// === Build Command Tests ===

#[test]
fn test_build_yaml_definition() {
    let dir = TempDir::new().unwrap();
    let file = definition(
        ".yaml",
        "title: Recent dashboards\noptions:\n  - show_recent\n  - max_items: 5\n  - span: 6\n",
    );

    let output = dashctl(&dir)
        .arg("build")
        .arg("--single")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let panel: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(panel["type"], "dashlist");
    assert_eq!(panel["title"], "Recent dashboards");
    assert_eq!(panel["recent"], true);
    assert_eq!(panel["limit"], 5);
    assert_eq!(panel["span"], 6);
    assert_eq!(panel["isNew"], false);
}

#[test]
fn test_build_rejects_wide_span() {
    let dir = TempDir::new().unwrap();
    let file = definition(".json", r#"{"title": "X", "options": [{"span": 15}]}"#);

    dashctl(&dir)
        .arg("build")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument for 'span'"));
}

#[test]
fn test_build_applies_config_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[output]\nindent = 0\n\n[defaults]\noptions = [\"show_starred\"]\n",
    )
    .unwrap();
    let file = definition(".toml", "title = \"Starred\"\n");

    dashctl(&dir)
        .arg("build")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"starred\":true"));
}

#[test]
fn test_build_yaml_output() {
    let dir = TempDir::new().unwrap();
    let file = definition(".yml", "title: Tags\noptions:\n  - tags: [b, a]\n");

    dashctl(&dir)
        .args(["build", "--format", "yaml"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Tags"))
        .stdout(predicate::str::contains("- b\n"));
}

// === Check Command Tests ===

#[test]
fn test_check_reports_each_panel() {
    let dir = TempDir::new().unwrap();
    let file = definition(
        ".yaml",
        "panels:\n  - title: Fine\n  - title: Broken\n    options:\n      - span: 0\n",
    );

    dashctl(&dir)
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("✓").and(predicate::str::contains("[Fine]")))
        .stdout(predicate::str::contains("✗").and(predicate::str::contains("[Broken]")))
        .stdout(predicate::str::contains("(invalid argument)"));
}

#[test]
fn test_check_missing_file() {
    let dir = TempDir::new().unwrap();

    dashctl(&dir)
        .args(["check", "/nonexistent/panel.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read definition file"));
}

// === Options / Config Command Tests ===

#[test]
fn test_options_lists_span() {
    let dir = TempDir::new().unwrap();

    dashctl(&dir)
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("span"))
        .stdout(predicate::str::contains("1..=12"));
}

#[test]
fn test_options_json() {
    let dir = TempDir::new().unwrap();

    let output = dashctl(&dir).args(["options", "--json"]).output().unwrap();
    assert!(output.status.success());

    let infos: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(infos[1]["name"], "span");
    assert_eq!(infos[1]["argument"], "integer 1..=12");
}

#[test]
fn test_config_path_honours_env() {
    let dir = TempDir::new().unwrap();

    dashctl(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_build_help() {
    let dir = TempDir::new().unwrap();

    dashctl(&dir)
        .args(["build", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Panel definition files"));
}
