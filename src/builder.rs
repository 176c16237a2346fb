//! # Doc Building
//!
//! Invokes the external documentation build inside the site clone. The
//! working copy is updated to the `develop` bookmark first, so the build
//! sees the revision the bookmark was set to at clone time.

use std::path::Path;

use crate::defaults::DEVELOP_BOOKMARK;
use crate::error::Result;
use crate::exec::{exec_command, StreamMode};

/// Build the documentation site inside the site clone.
///
/// Updates the working copy to the `develop` bookmark, lists the working
/// copy contents, then runs `make github` in the `doc` subdirectory. Build
/// output streams through to the console; any failing command surfaces as
/// [`crate::error::Error::CommandFailed`].
pub fn build_docs(site_dir: &Path) -> Result<()> {
    log::info!("building docs in {}", site_dir.display());

    exec_command(
        &format!("hg up {}", DEVELOP_BOOKMARK),
        site_dir,
        StreamMode::Inherit,
        StreamMode::Capture,
    )?;
    exec_command("ls", site_dir, StreamMode::Inherit, StreamMode::Capture)?;
    exec_command(
        "make github",
        &site_dir.join("doc"),
        StreamMode::Inherit,
        StreamMode::Capture,
    )?;
    Ok(())
}
