use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("quill")
        .env("QUILL_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("quill")
        .env("QUILL_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("api_base_url ="));
    assert!(contents.contains("refetch_after_create = true"));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "# existing config").unwrap();

    cargo_bin_cmd!("quill")
        .env("QUILL_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_set_url_keeps_comments() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    cargo_bin_cmd!("quill")
        .env("QUILL_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    cargo_bin_cmd!("quill")
        .env("QUILL_HOME", dir.path())
        .args(["config", "set-url", "https://blog.example.com/api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://blog.example.com/api"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains(r#"api_base_url = "https://blog.example.com/api""#));
    assert!(contents.contains("# Base URL of the blog API"));
}

#[test]
fn test_config_set_url_rejects_invalid_url() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("quill")
        .env("QUILL_HOME", dir.path())
        .args(["config", "set-url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid API base URL"));
}

#[test]
fn test_whoami_without_session() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("quill")
        .env("QUILL_HOME", dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

#[test]
fn test_interactive_mode_requires_terminal() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("quill")
        .env("QUILL_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs a terminal"));
}
