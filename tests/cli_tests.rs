//! Command-line behavior that does not need a terminal
//!
//! Every case here exits before the UI takes over the screen.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn searchdeck() -> Command {
    let mut cmd = Command::cargo_bin("searchdeck").unwrap();
    // Keep the user's own config out of the way
    cmd.env("HOME", std::env::temp_dir());
    cmd
}

#[test]
fn test_version_flag() {
    searchdeck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("searchdeck"));
}

#[test]
fn test_help_lists_options() {
    searchdeck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--server"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--log-file"))
        .stdout(predicate::str::contains("[QUERY]"));
}

#[test]
fn test_invalid_server_url_fails_before_ui() {
    searchdeck()
        .args(["--server", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid server URL 'not a url'"));
}

#[test]
fn test_invalid_server_url_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nbase_url = \"mailto:nobody@example.com\"").unwrap();

    searchdeck()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid server URL"));
}

#[test]
fn test_malformed_config_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[panels]\nimages = \"sometimes\"").unwrap();

    searchdeck()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_missing_explicit_config_fails() {
    searchdeck()
        .args(["--config", "/nonexistent/searchdeck/config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    searchdeck()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
