//! CLI integration tests using the REAL solpkg binary
//!
//! Only commands that never touch the system repo or spawn sudo are
//! exercised here; the mutating paths are covered by unit tests against
//! temp directories.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
fn solpkg_cmd() -> Command {
    Command::cargo_bin("solpkg").unwrap()
}

#[test]
fn test_help_output() {
    solpkg_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Solus packaging"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("copy"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("clone"));
}

#[test]
fn test_version_output() {
    solpkg_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("solpkg"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    solpkg_cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("solpkg"));
}

#[test]
fn test_completions_unknown_shell() {
    solpkg_cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_init_requires_common_directory() {
    let temp = TempDir::new().unwrap();

    solpkg_cmd()
        .current_dir(temp.path())
        .args(["init", "nano", "https://example.com/nano-7.2.tar.xz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("common"));

    // Precondition failure creates nothing
    assert!(!temp.path().join("nano").exists());
}

#[test]
fn test_init_requires_url_argument() {
    solpkg_cmd()
        .args(["init", "nano"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage").or(predicate::str::contains("required")));
}

#[test]
fn test_init_alias() {
    let temp = TempDir::new().unwrap();

    // Alias resolves to init; fails on the same precondition
    solpkg_cmd()
        .current_dir(temp.path())
        .args(["i", "nano", "https://example.com/nano-7.2.tar.xz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("common"));
}

#[test]
fn test_clone_requires_common_directory() {
    let temp = TempDir::new().unwrap();

    solpkg_cmd()
        .current_dir(temp.path())
        .args(["clone", "nano"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("common"));
}

#[test]
fn test_unknown_subcommand() {
    solpkg_cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}
