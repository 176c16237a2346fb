//! Default values for docbuild configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Local directory name the site repository is cloned into.
pub const SITE_DIR: &str = "c3org";

/// Local directory name the source repository is cloned into.
pub const SOURCE_DIR: &str = "c3src";

/// Bookmark the documentation site is built from.
pub const DEVELOP_BOOKMARK: &str = "develop";

/// Working-directory setup script relocated from the source clone's doc
/// folder into the site clone's doc folder.
pub const WORKING_DIR_SCRIPT: &str = "set_working_directory.py";

/// Bibliography file relocated alongside the setup script.
pub const BIBLIOGRAPHY_FILE: &str = "cogent3.bib";

/// Returns the canonical location of the site repository.
///
/// Defaults to `~/repos/cogent3org`, falling back to a relative path when
/// the home directory cannot be determined.
///
/// This can be overridden by the `--site-repo` CLI flag or the
/// `DOCBUILD_SITE_REPO` environment variable.
pub fn default_site_repo() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("repos")
        .join("cogent3org")
}

/// Returns the canonical location of the source repository.
///
/// Defaults to `~/repos/Cogent3`, with the same fallback and override
/// behavior as [`default_site_repo`].
pub fn default_source_repo() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("repos")
        .join("Cogent3")
}
