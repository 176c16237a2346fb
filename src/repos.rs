//! # Repository Management
//!
//! Handles the local working copies the documentation build runs against:
//! removing stale clones, bookmarking the canonical site repository,
//! cloning both repositories, and stitching the source repository's doc
//! tree into the site working copy.
//!
//! All operations take their roots from a [`RepoLayout`]; nothing here
//! mutates the process-wide current directory. External Mercurial commands
//! receive their working directory through the command runner.

use std::fs;
use std::path::PathBuf;

use crate::defaults::{
    BIBLIOGRAPHY_FILE, DEVELOP_BOOKMARK, SITE_DIR, SOURCE_DIR, WORKING_DIR_SCRIPT,
};
use crate::error::{Error, Result};
use crate::exec::run;

#[cfg(unix)]
use std::os::unix::fs::symlink;
#[cfg(windows)]
use std::os::windows::fs::symlink_dir as symlink;

/// Where the canonical repositories live and where their clones land.
#[derive(Debug, Clone)]
pub struct RepoLayout {
    /// Canonical location of the documentation site repository.
    pub site_repo: PathBuf,
    /// Canonical location of the source repository.
    pub source_repo: PathBuf,
    /// Directory the local clones are created in.
    pub work_root: PathBuf,
}

impl RepoLayout {
    pub fn new(site_repo: PathBuf, source_repo: PathBuf, work_root: PathBuf) -> Self {
        Self {
            site_repo,
            source_repo,
            work_root,
        }
    }

    /// Local clone of the site repository.
    pub fn site_dir(&self) -> PathBuf {
        self.work_root.join(SITE_DIR)
    }

    /// Local clone of the source repository.
    pub fn source_dir(&self) -> PathBuf {
        self.work_root.join(SOURCE_DIR)
    }

    /// Remove stale local clones from a previous run.
    ///
    /// Idempotent; directories that do not exist are skipped.
    pub fn remove_old_repos(&self) -> Result<()> {
        for dir in [self.site_dir(), self.source_dir()] {
            if dir.exists() {
                log::info!("removing stale clone {}", dir.display());
                fs::remove_dir_all(&dir)?;
            }
        }
        Ok(())
    }

    /// Force-set the `develop` bookmark in the canonical site repository.
    ///
    /// The clone checks out whatever `develop` points at, so the bookmark
    /// must track the current revision before cloning. Any prior bookmark
    /// of that name is overwritten.
    pub fn bookmark_site_repo(&self) -> Result<()> {
        run(
            &format!("hg bookmark {} -f", DEVELOP_BOOKMARK),
            &self.site_repo,
        )?;
        Ok(())
    }

    /// Clone both repositories and move the source docs into place.
    ///
    /// Bookmarks the site repository, clones source then site into the
    /// work root, links `<site>/doc/doc` to the source clone's `doc`
    /// directory, and relocates the working-directory setup script and
    /// bibliography file into the site clone's doc folder.
    pub fn clone_repos(&self) -> Result<()> {
        self.bookmark_site_repo()?;

        log::info!("cloning {}", self.source_repo.display());
        run(
            &format!("hg clone {} {}", self.source_repo.display(), SOURCE_DIR),
            &self.work_root,
        )?;
        log::info!("cloning {}", self.site_repo.display());
        run(
            &format!("hg clone {} {}", self.site_repo.display(), SITE_DIR),
            &self.work_root,
        )?;

        self.link_doc_trees()
    }

    /// Stitch the source clone's doc tree into the site clone.
    ///
    /// The link is a symlink rather than a copy, so later pruning inside
    /// the site clone edits the shared tree. Two files the site build
    /// expects at its own doc root are moved, not copied, out of the
    /// source docs.
    pub fn link_doc_trees(&self) -> Result<()> {
        let src_docs = self.source_dir().join("doc");
        if !src_docs.is_dir() {
            return Err(Error::MissingDocs { path: src_docs });
        }
        let src_docs = src_docs.canonicalize()?;

        let site_docs = self.site_dir().join("doc");
        symlink(&src_docs, site_docs.join("doc"))?;

        for name in [WORKING_DIR_SCRIPT, BIBLIOGRAPHY_FILE] {
            fs::rename(src_docs.join(name), site_docs.join(name))?;
        }
        Ok(())
    }
}
