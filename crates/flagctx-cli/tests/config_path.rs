use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("flagctx")
        .env("FLAGCTX_HOME", dir.path())
        .env_remove("FLAGCTX_CONFIG")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_path_honors_override() {
    let dir = tempdir().unwrap();
    let custom = dir.path().join("custom.toml");

    cargo_bin_cmd!("flagctx")
        .env("FLAGCTX_HOME", dir.path())
        .arg("--config")
        .arg(&custom)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_config_path_honors_env_override() {
    let dir = tempdir().unwrap();
    let custom = dir.path().join("from-env.toml");

    cargo_bin_cmd!("flagctx")
        .env("FLAGCTX_HOME", dir.path())
        .env("FLAGCTX_CONFIG", &custom)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from-env.toml"));
}

#[test]
fn test_config_flag_wins_over_env() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("flagctx")
        .env("FLAGCTX_HOME", dir.path())
        .env("FLAGCTX_CONFIG", dir.path().join("from-env.toml"))
        .arg("--config")
        .arg(dir.path().join("from-flag.toml"))
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from-flag.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    cargo_bin_cmd!("flagctx")
        .env("FLAGCTX_HOME", dir.path())
        .env_remove("FLAGCTX_CONFIG")
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("client_side_id ="));
    assert!(contents.contains("[flags.accessGranted]"));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "# existing config").unwrap();

    cargo_bin_cmd!("flagctx")
        .env("FLAGCTX_HOME", dir.path())
        .env_remove("FLAGCTX_CONFIG")
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(&config_path).unwrap(),
        "# existing config"
    );
}
