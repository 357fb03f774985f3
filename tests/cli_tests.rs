//! CLI integration tests using the REAL sitepatch binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn sitepatch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sitepatch").unwrap();
    cmd.env_remove("SITEPATCH_WORKSPACE");
    cmd
}

#[test]
fn test_help_output() {
    sitepatch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bilingual static sites"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--workspace"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_output() {
    sitepatch_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sitepatch"))
        .stdout(predicate::str::contains("Build info"))
        .stdout(predicate::str::contains("libgit2"));
}

#[test]
fn test_version_flag() {
    sitepatch_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions_bash() {
    sitepatch_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sitepatch"));
}

#[test]
fn test_completions_unknown_shell() {
    sitepatch_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Unknown shell: tcsh"));
}

#[test]
fn test_unknown_flag_fails() {
    sitepatch_cmd()
        .arg("--frozen")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--frozen"));
}

#[test]
fn test_workspace_env_var() {
    let workspace = common::TestWorkspace::new();

    sitepatch_cmd()
        .env("SITEPATCH_WORKSPACE", &workspace.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Primary document set not found"));
}

#[test]
fn test_missing_workspace_dir() {
    let workspace = common::TestWorkspace::new();

    sitepatch_cmd()
        .arg("-w")
        .arg(workspace.path.join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist"));
}
