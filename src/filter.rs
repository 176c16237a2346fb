//! # File Pruning
//!
//! Glob-based retention over a directory tree. A pruning pass walks every
//! entry under a root and deletes the files whose rendered path matches no
//! pattern in the keep-set. Directories are never deleted directly; their
//! contents are still visited.
//!
//! Patterns match the full path string, so `*index.rst` retains an index
//! document at any depth and `*draw_exa*` retains anything inside the
//! drawing-examples directory. Matching is case-sensitive.
//!
//! Deletions are independent per file, so traversal order does not affect
//! the end state.

use std::fs;
use std::path::Path;

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::Result;

/// Keep-set for [`reduce_draw_examples`]: the simplest drawing examples
/// plus their README.
pub const DRAW_KEEP_PATTERNS: [&str; 3] = ["*gaps-per-seq*", "*-square.py", "*README*"];

/// Always-kept doc files for [`remove_docs`]: index pages, templates, and
/// the drawing examples.
pub const DOC_KEEP_PATTERNS: [&str; 3] = ["*index.rst", "*template*", "*draw_exa*"];

/// Compile a set of glob pattern strings.
fn compile_patterns(patterns: &[&str]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).map_err(Into::into))
        .collect()
}

/// Whether a path's string rendering matches any pattern in the set.
pub fn path_matches(path: &Path, patterns: &[Pattern]) -> bool {
    let rendered = path.to_string_lossy();
    patterns.iter().any(|pattern| pattern.matches(&rendered))
}

/// Delete every file under `root` that matches none of the keep patterns.
///
/// When `extension` is given, only files with that extension are deletion
/// candidates; everything else is left alone. Directories are always kept.
/// A missing `root` is a no-op.
///
/// Returns the number of files deleted.
pub fn prune_tree(root: &Path, keep: &[Pattern], extension: Option<&str>) -> Result<usize> {
    if !root.exists() {
        return Ok(0);
    }

    let mut deleted = 0;
    // The doc root is reached through the doc/doc symlink, so the walker
    // must follow links.
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();
        if let Some(required) = extension {
            if path.extension().and_then(|e| e.to_str()) != Some(required) {
                continue;
            }
        }
        if path_matches(path, keep) {
            continue;
        }
        fs::remove_file(path)?;
        deleted += 1;
    }

    log::debug!("pruned {} files under {}", deleted, root.display());
    Ok(deleted)
}

/// Prune the drawing examples down to the simplest subset.
///
/// Everything under `<site>/doc/doc/draw_examples` is deleted except files
/// matching [`DRAW_KEEP_PATTERNS`].
pub fn reduce_draw_examples(site_dir: &Path) -> Result<usize> {
    let keep = compile_patterns(&DRAW_KEEP_PATTERNS)?;
    let root = site_dir.join("doc").join("doc").join("draw_examples");
    prune_tree(&root, &keep, None)
}

/// Prune doc sources under `<site>/doc/doc` down to those matching
/// `pattern`.
///
/// Only `.rst` files are candidates. Index docs, templates, and the
/// drawing examples ([`DOC_KEEP_PATTERNS`]) survive regardless of the
/// caller's pattern.
pub fn remove_docs(site_dir: &Path, pattern: &str) -> Result<usize> {
    let mut keep = compile_patterns(&DOC_KEEP_PATTERNS)?;
    keep.push(Pattern::new(pattern)?);
    let root = site_dir.join("doc").join("doc");
    prune_tree(&root, &keep, Some("rst"))
}
