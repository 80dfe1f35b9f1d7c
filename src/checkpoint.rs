use std::path::Path;

use tracing::{info, warn};

use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::vcs::VersionControl;

/// Requires a clean working tree, then arms `cancel` so that any later
/// interrupt ends in a rollback. Nothing in `root` is touched.
pub fn establish(
    vcs: &dyn VersionControl,
    root: &Path,
    cancel: &CancellationToken,
) -> Result<()> {
    cancel.check()?;
    vcs.check_clean(root)?;
    cancel.arm();
    info!(root = %root.display(), "checkpoint established");
    Ok(())
}

/// Reverts the project to its last commit. Safe to call more than once.
pub struct Rollback<'a> {
    vcs: &'a dyn VersionControl,
    root: &'a Path,
}

impl<'a> Rollback<'a> {
    pub fn new(vcs: &'a dyn VersionControl, root: &'a Path) -> Self {
        Self { vcs, root }
    }

    pub fn run(&self) -> Result<()> {
        warn!(root = %self.root.display(), "reverting changes");
        self.vcs.hard_reset_and_clean(self.root)
    }
}
