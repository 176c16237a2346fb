//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `docbuild` application. It uses the `thiserror` library to create an
//! `Error` enum covering the anticipated failure modes, providing clear
//! and descriptive error messages.
//!
//! The original script terminated the whole process from deep inside the
//! command runner. Here every failure is a value that propagates up to the
//! binary's `main`, which decides the process exit code — identical
//! observable behavior, but the library stays testable without spawning a
//! process just to watch it die.

use thiserror::Error;

/// Main error type for docbuild operations
#[derive(Error, Debug)]
pub enum Error {
    /// An external command exited with a nonzero status.
    ///
    /// Carries the command string, the child's exit code, and whatever the
    /// child wrote to stderr. The binary exits with `code` when this error
    /// reaches the top level.
    #[error("FAILED: {command}\n{stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// The source clone is missing its `doc` directory.
    ///
    /// Raised after a clone completes; indicates a malformed upstream
    /// repository. There is no recovery path.
    #[error("source repository clone has no doc directory at {path}")]
    MissingDocs { path: std::path::PathBuf },

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The process exit code this error maps to at the top level.
    ///
    /// Command failures propagate the child's exit code; everything else
    /// is a general error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
