//! # External Command Execution
//!
//! This module runs external shell commands (the Mercurial client, `make`,
//! directory listings) synchronously and turns nonzero exits into typed
//! errors carrying the child's exit code and stderr text.
//!
//! Commands always receive an explicit working directory. The process-wide
//! current directory is never mutated; external tools that care about their
//! working directory (Mercurial, `make`) get it through the child process
//! instead.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// How a child process stream is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamMode {
    /// Intercept the stream; captured text is available after the call.
    Capture,
    /// Pass the stream through to the parent's own stream.
    Inherit,
}

/// Execute a shell command in `dir` and wait for it to complete.
///
/// The command string is interpreted by `sh -c`, so pipelines and
/// shell-expanded arguments behave as they would at a prompt.
///
/// On exit status 0, returns the captured stdout decoded as text, or
/// `None` when `stdout` is [`StreamMode::Inherit`]. On nonzero exit,
/// returns [`Error::CommandFailed`] with the command string, the child's
/// exit code, and captured stderr (empty when stderr was inherited).
///
/// A child killed by a signal has no exit code; it is reported as exit
/// code 1.
pub fn exec_command(
    command: &str,
    dir: &Path,
    stdout: StreamMode,
    stderr: StreamMode,
) -> Result<Option<String>> {
    log::debug!("exec: {} (in {})", command, dir.display());

    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command).current_dir(dir);
    if stdout == StreamMode::Inherit {
        cmd.stdout(Stdio::inherit());
    }
    if stderr == StreamMode::Inherit {
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output()?;

    if !output.status.success() {
        return Err(Error::CommandFailed {
            command: command.to_string(),
            code: output.status.code().unwrap_or(1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    match stdout {
        StreamMode::Capture => Ok(Some(
            String::from_utf8_lossy(&output.stdout).into_owned(),
        )),
        StreamMode::Inherit => Ok(None),
    }
}

/// Execute a shell command in `dir`, capturing both streams.
pub fn run(command: &str, dir: &Path) -> Result<Option<String>> {
    exec_command(command, dir, StreamMode::Capture, StreamMode::Capture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn here() -> PathBuf {
        std::env::temp_dir()
    }

    #[test]
    fn test_run_returns_stdout_exactly() {
        let out = run("printf 'hello world'", &here()).unwrap();
        assert_eq!(out, Some("hello world".to_string()));
    }

    #[test]
    fn test_inherited_stdout_returns_none() {
        let out = exec_command("true", &here(), StreamMode::Inherit, StreamMode::Capture).unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn test_nonzero_exit_carries_exit_code() {
        let err = run("exit 3", &here()).unwrap_err();
        match err {
            Error::CommandFailed { code, command, .. } => {
                assert_eq!(code, 3);
                assert_eq!(command, "exit 3");
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_captures_stderr_text() {
        let err = run("echo boom >&2; exit 1", &here()).unwrap_err();
        match err {
            Error::CommandFailed { stderr, .. } => assert!(stderr.contains("boom")),
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_command_runs_in_given_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let out = run("pwd", temp.path()).unwrap().unwrap();
        let reported = PathBuf::from(out.trim());
        assert_eq!(
            reported.canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let err = run("true", Path::new("/nonexistent/docbuild-test")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
