//! End-to-end tests for CLI exit codes.
//!
//! These tests verify that the CLI returns the correct exit codes:
//!
//! - Exit code 0: Success
//! - Exit code 2: Invalid command-line usage (handled by clap)
//! - Nonzero otherwise: propagated from the failing step
//!
//! None of these invocations reach the external documentation build; they
//! exercise argument handling and early failures only.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Exit code 0 is returned for --help.
#[test]
fn test_exit_code_help() {
    let mut cmd = cargo_bin_cmd!("docbuild");

    cmd.arg("--help").assert().code(0);
}

/// Exit code 0 is returned for --version.
#[test]
fn test_exit_code_version() {
    let mut cmd = cargo_bin_cmd!("docbuild");

    cmd.arg("--version").assert().code(0);
}

/// Exit code 2 is returned for unknown command-line flags (handled by clap).
#[test]
fn test_exit_code_usage_unknown_flag() {
    let mut cmd = cargo_bin_cmd!("docbuild");

    cmd.arg("--unknown-flag-that-does-not-exist")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"));
}

/// Exit code 2 is returned for unknown subcommand.
#[test]
fn test_exit_code_usage_unknown_subcommand() {
    let mut cmd = cargo_bin_cmd!("docbuild");

    cmd.arg("unknown-subcommand-xyz")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"));
}

/// Subcommand help returns exit code 0.
#[test]
fn test_exit_code_subcommand_help() {
    let mut cmd = cargo_bin_cmd!("docbuild");

    cmd.arg("build-all").arg("--help").assert().code(0);
}

/// The global --log-level flag is accepted alongside subcommands.
#[test]
fn test_log_level_flag_in_help() {
    let mut cmd = cargo_bin_cmd!("docbuild");

    cmd.arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("--log-level"));
}

/// A failing external command surfaces as FAILED plus the command string.
///
/// The site repository path exists but is not a Mercurial repository (or
/// `hg` is absent entirely), so the bookmark step is the first failure.
#[test]
fn test_failed_command_is_reported_on_stderr() {
    let temp = assert_fs::TempDir::new().unwrap();
    let site_remote = temp.path().join("site-remote");
    std::fs::create_dir_all(&site_remote).unwrap();

    let mut cmd = cargo_bin_cmd!("docbuild");

    cmd.current_dir(temp.path())
        .arg("build-all")
        .arg("--site-repo")
        .arg(&site_remote)
        .arg("--source-repo")
        .arg(temp.path().join("source-remote"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("FAILED: hg bookmark develop -f"));
}
