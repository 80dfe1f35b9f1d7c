mod node;

use std::path::Path;

use crate::error::Result;

pub use node::NodePackageManager;

/// Adds packages to the target project.
#[cfg_attr(test, mockall::automock)]
pub trait PackageManager {
    /// Executable name, for progress output.
    fn name(&self) -> String;

    /// Adds `source` (a registry name or a relative path) as a dev
    /// dependency of the project in `root`. Makes exactly one attempt.
    fn add_dev_dependency(&self, root: &Path, source: &str) -> Result<()>;
}

/// Picks the package manager for the project in `dir`: the configured one
/// if any, else whatever the project's lockfiles point to, else yarn.
pub fn select_package_manager(
    configured: Option<NodePackageManager>,
    dir: &Path,
) -> NodePackageManager {
    configured
        .or_else(|| NodePackageManager::detect(dir))
        .unwrap_or(NodePackageManager::Yarn)
}
