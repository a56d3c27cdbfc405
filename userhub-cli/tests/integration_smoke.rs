//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help_lists_commands() {
    let mut cmd = Command::cargo_bin("userhub").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("import"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("userhub").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--db-host"))
        .stdout(predicate::str::contains("--cors-permissive"));
}

#[test]
fn test_import_help() {
    let mut cmd = Command::cargo_bin("userhub").unwrap();
    cmd.arg("import").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--source-url"))
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--db-acquire-timeout"));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("userhub").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure();
}
