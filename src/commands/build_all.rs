//! Build-all command implementation
//!
//! Runs the full sequence: remove stale clones, clone and link both
//! repositories, build the docs. Every step is a hard prerequisite for
//! the next; the first failure halts the run.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use docbuild::builder::build_docs;
use docbuild::defaults;
use docbuild::repos::RepoLayout;

/// Arguments for the build-all command
#[derive(Args, Debug)]
pub struct BuildAllArgs {
    /// Canonical location of the site repository
    #[arg(long, value_name = "PATH", env = "DOCBUILD_SITE_REPO")]
    pub site_repo: Option<PathBuf>,

    /// Canonical location of the source repository
    #[arg(long, value_name = "PATH", env = "DOCBUILD_SOURCE_REPO")]
    pub source_repo: Option<PathBuf>,
}

/// Resolve the repository layout from arguments and defaults.
///
/// Clones land in the process's current directory, matching the
/// run-from-anywhere behavior of the original workflow.
pub fn resolve_layout(
    site_repo: Option<PathBuf>,
    source_repo: Option<PathBuf>,
) -> Result<RepoLayout> {
    let site_repo = site_repo.unwrap_or_else(defaults::default_site_repo);
    let source_repo = source_repo.unwrap_or_else(defaults::default_source_repo);
    let work_root = std::env::current_dir()?;
    Ok(RepoLayout::new(site_repo, source_repo, work_root))
}

/// Execute the build-all command
pub fn execute(args: BuildAllArgs) -> Result<()> {
    let layout = resolve_layout(args.site_repo, args.source_repo)?;

    layout.remove_old_repos()?;
    layout.clone_repos()?;
    build_docs(&layout.site_dir())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_layout_uses_canonical_defaults() {
        let layout = resolve_layout(None, None).unwrap();
        assert!(layout.site_repo.ends_with("repos/cogent3org"));
        assert!(layout.source_repo.ends_with("repos/Cogent3"));
    }

    #[test]
    fn test_resolve_layout_honors_overrides() {
        let layout = resolve_layout(
            Some(PathBuf::from("/srv/site")),
            Some(PathBuf::from("/srv/source")),
        )
        .unwrap();
        assert_eq!(layout.site_repo, PathBuf::from("/srv/site"));
        assert_eq!(layout.source_repo, PathBuf::from("/srv/source"));
    }
}
