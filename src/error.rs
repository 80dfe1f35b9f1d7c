use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop an installation run.
///
/// `DirtyWorkingTree` and `VersionControl` are raised before anything is
/// written; the rest happen after the checkpoint and are followed by a
/// rollback.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("There are uncommitted changes. Please, commit before installing Poetic.")]
    DirtyWorkingTree {
        /// Porcelain status lines, one per pending change.
        changes: Vec<String>,
    },

    #[error("git {operation} failed: {message}")]
    VersionControl {
        operation: &'static str,
        message: String,
    },

    #[error("Could not install configuration files: failed to copy {}: {source}", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not update package.json: package.json not found in {}.", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("Could not update {}: {reason}", path.display())]
    ManifestUpdate { path: PathBuf, reason: String },

    #[error("Could not install packages: adding {package} failed: {message}")]
    PackageInstall { package: String, message: String },

    #[error("Installation was interrupted.")]
    Interrupted,
}

impl InstallError {
    pub fn copy(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Copy {
            path: path.into(),
            source,
        }
    }

    pub fn manifest_update(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ManifestUpdate {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = InstallError> = std::result::Result<T, E>;
