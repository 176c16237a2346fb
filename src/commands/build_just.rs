//! Build-just command implementation
//!
//! Same sequence as build-all, with pruning steps in between: optionally
//! reduce the drawing examples to the simplest subset, optionally delete
//! doc sources that match neither the caller's pattern nor the protected
//! patterns. At least one of the two selections is required; with
//! neither, clap rejects the invocation before any side effect occurs.

use anyhow::Result;
use clap::{ArgGroup, Args};
use std::path::PathBuf;

use docbuild::builder::build_docs;
use docbuild::filter::{reduce_draw_examples, remove_docs};

use super::build_all::resolve_layout;

/// Arguments for the build-just command
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("selection")
        .required(true)
        .multiple(true)
        .args(["pattern", "simplify_draw"])
))]
pub struct BuildJustArgs {
    /// Glob pattern matching a directory, or doc file to match
    #[arg(short, long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Removes all drawing examples except simple ones
    #[arg(short, long)]
    pub simplify_draw: bool,

    /// Canonical location of the site repository
    #[arg(long, value_name = "PATH", env = "DOCBUILD_SITE_REPO")]
    pub site_repo: Option<PathBuf>,

    /// Canonical location of the source repository
    #[arg(long, value_name = "PATH", env = "DOCBUILD_SOURCE_REPO")]
    pub source_repo: Option<PathBuf>,
}

/// Execute the build-just command
pub fn execute(args: BuildJustArgs) -> Result<()> {
    let layout = resolve_layout(args.site_repo, args.source_repo)?;

    layout.remove_old_repos()?;
    layout.clone_repos()?;

    if args.simplify_draw {
        let deleted = reduce_draw_examples(&layout.site_dir())?;
        log::info!("reduced drawing examples, {} files removed", deleted);
    }

    if let Some(pattern) = &args.pattern {
        let deleted = remove_docs(&layout.site_dir(), pattern)?;
        log::info!("kept docs matching {:?}, {} files removed", pattern, deleted);
    }

    build_docs(&layout.site_dir())?;
    Ok(())
}
