// ABOUTME: Integration tests for the xrruntime CLI.
// ABOUTME: Validates help, list, selection switches, --init, and JSON output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

fn xrruntime_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("xrruntime"))
}

/// A runtime list with one installed and one missing runtime.
fn fixture(dir: &Path) -> (PathBuf, PathBuf) {
    let manifest = dir.join("test_runtime.json");
    fs::write(&manifest, r#"{"runtime": {"name": "ignored"}}"#).unwrap();

    let platform = if cfg!(windows) { "windows" } else { "linux" };
    let config = dir.join("runtimes.txt");
    fs::write(
        &config,
        format!(
            "{platform} TestRuntime {}\n{platform} Ghost {}\n",
            manifest.display(),
            dir.join("ghost.json").display()
        ),
    )
    .unwrap();
    (config, manifest)
}

#[test]
fn no_arguments_shows_help() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _) = fixture(dir.path());

    xrruntime_cmd()
        .env("XRRUNTIME_CONFIG", &config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: xrruntime"))
        .stdout(predicate::str::contains("--TestRuntime"));
}

#[test]
fn help_lists_present_runtimes_only() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _) = fixture(dir.path());

    xrruntime_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--list"))
        .stdout(predicate::str::contains("--TestRuntime"))
        .stdout(predicate::str::contains("--Ghost").not());
}

#[test]
fn question_mark_shows_help() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _) = fixture(dir.path());

    xrruntime_cmd()
        .arg("--config")
        .arg(&config)
        .arg("-?")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: xrruntime"));
}

#[test]
fn list_shows_present_runtimes() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _) = fixture(dir.path());

    xrruntime_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("TestRuntime"))
        .stdout(predicate::str::contains("Ghost").not());
}

#[test]
fn runtime_switch_prints_loader_override() {
    let dir = tempfile::tempdir().unwrap();
    let (config, manifest) = fixture(dir.path());

    xrruntime_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--testruntime")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "XR_RUNTIME_JSON={}",
            manifest.display()
        )));
}

#[test]
fn missing_runtime_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _) = fixture(dir.path());

    xrruntime_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--GHOST")
        .assert()
        .success()
        .stderr(predicate::str::contains("isn't installed"))
        .stderr(predicate::str::contains("ghost.json"));
}

#[test]
fn unknown_switch_shows_help() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _) = fixture(dir.path());

    xrruntime_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--no-such-runtime")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: xrruntime"));
}

#[test]
fn init_creates_template_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("xrruntime").join("runtimes.txt");

    xrruntime_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created runtime list"));
    assert_eq!(
        fs::read_to_string(&config).unwrap(),
        xrruntime::config::TEMPLATE
    );

    xrruntime_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(
        fs::read_to_string(&config).unwrap(),
        xrruntime::config::TEMPLATE
    );
}

#[test]
fn json_list_includes_every_candidate() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _) = fixture(dir.path());

    let output = xrruntime_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--list")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let events: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert!(events.iter().all(|e| e["event"] == "runtime"));

    let test = events.iter().find(|e| e["name"] == "TestRuntime").unwrap();
    assert_eq!(test["present"], true);
    assert_eq!(test["source"], "user_config");
    let ghost = events.iter().find(|e| e["name"] == "Ghost").unwrap();
    assert_eq!(ghost["present"], false);
}

#[test]
fn runtime_named_like_builtin_option_is_flagged_in_help() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("json_runtime.json");
    fs::write(&manifest, "{}").unwrap();
    let platform = if cfg!(windows) { "windows" } else { "linux" };
    let config = dir.path().join("runtimes.txt");
    fs::write(&config, format!("{platform} Json {}\n", manifest.display())).unwrap();

    xrruntime_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shares a name with a built-in option"))
        .stdout(predicate::str::contains("--Json").not());
}
