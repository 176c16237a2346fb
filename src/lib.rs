//! # Docbuild Library
//!
//! This library provides the core functionality for building the project's
//! documentation site. It is designed to be used by the `docbuild`
//! command-line tool but the individual pieces (command execution, file
//! pruning, repository layout) can also be driven directly from other code.
//!
//! ## Core Concepts
//!
//! The library is built around a few key concepts:
//!
//! - **Command Execution (`exec`)**: Runs external shell commands (the
//!   Mercurial client, `make`) synchronously with an explicit working
//!   directory, returning captured output or a typed failure carrying the
//!   child's exit code.
//! - **Repository Layout (`repos`)**: Describes where the canonical remote
//!   repositories live and where their local clones land, and performs the
//!   clone/link/relocate sequence that stitches the source repository's doc
//!   tree into the site repository's working copy.
//! - **File Pruning (`filter`)**: Glob-based retention over a directory
//!   tree. Files that match no keep-pattern are deleted; directories and
//!   protected names always survive.
//! - **Doc Building (`builder`)**: Updates the site clone to the build
//!   bookmark and invokes the external documentation build.
//!
//! ## Execution Flow
//!
//! A full build executes the following high-level steps:
//!
//! 1.  **Cleanup**: Remove any stale local clones from a previous run.
//! 2.  **Clone**: Bookmark the site repository, clone both repositories,
//!     and link the source doc tree into the site working copy.
//! 3.  **Prune** (optional): Delete documentation files and drawing
//!     examples outside the requested subset.
//! 4.  **Build**: Invoke the external documentation build tool.
//!
//! Every step is a hard prerequisite for the next; the first failure halts
//! the run and the binary exits with the failing command's exit code. No
//! rollback is attempted — the working directory is left in whatever state
//! the last completed step produced.

pub mod builder;
pub mod defaults;
pub mod error;
pub mod exec;
pub mod filter;
pub mod repos;
