use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn login(home: &Path, role: &str) -> assert_cmd::assert::Assert {
    cargo_bin_cmd!("flagctx")
        .env("FLAGCTX_HOME", home)
        .env_remove("FLAGCTX_CONFIG")
        .args([
            "login",
            "--username",
            "sandy",
            "--email",
            "sandy@example.com",
            "--role",
            role,
        ])
        .assert()
}

#[test]
fn test_admin_is_granted_with_default_flags() {
    let dir = tempdir().unwrap();

    login(dir.path(), "admin")
        .success()
        .stdout(predicate::str::contains("Login successful!"));
}

#[test]
fn test_other_role_is_denied() {
    let dir = tempdir().unwrap();

    login(dir.path(), "viewer")
        .failure()
        .stderr(predicate::str::contains("Access denied for this role"));
}

#[test]
fn test_flag_definitions_come_from_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"
[flags.accessGranted]
default = false

[[flags.accessGranted.rules]]
attribute = "role"
values = ["viewer"]
value = true
"#,
    )
    .unwrap();

    login(dir.path(), "viewer").success();
    login(dir.path(), "admin")
        .failure()
        .stderr(predicate::str::contains("Access denied for this role"));
}

#[test]
fn test_flag_source_failure_is_generic_error() {
    let dir = tempdir().unwrap();
    // Bootstrap succeeds against a source that accepts the anonymous key but
    // the submitted username is blank, which the source rejects.
    cargo_bin_cmd!("flagctx")
        .env("FLAGCTX_HOME", dir.path())
        .env_remove("FLAGCTX_CONFIG")
        .args([
            "login",
            "--username",
            " ",
            "--email",
            "sandy@example.com",
            "--role",
            "admin",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("An error occurred during login"));
}

#[test]
fn test_bootstrap_failure_is_fatal() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[options]\noffline = true\n",
    )
    .unwrap();

    login(dir.path(), "admin")
        .failure()
        .stderr(predicate::str::contains("initialize flag provider"));
}

#[test]
fn test_logs_are_written_under_home() {
    let dir = tempdir().unwrap();

    login(dir.path(), "admin").success();

    assert!(dir.path().join("logs").join("flagctx.log").exists());
}
