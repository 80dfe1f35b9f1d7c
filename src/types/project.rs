use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "package.json";
pub const FRAGMENT_FILE: &str = "package.boilerplate.json";

/// The two directories a run works between: the bundled assets it reads
/// from and the project it writes into.
#[derive(Clone, Debug)]
pub struct Project {
    pub source_root: PathBuf,
    pub target_root: PathBuf,
}

impl Project {
    pub fn new(source_root: impl Into<PathBuf>, target_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            target_root: target_root.into(),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.target_root.join(MANIFEST_FILE)
    }

    pub fn fragment_path(&self) -> PathBuf {
        self.source_root.join(FRAGMENT_FILE)
    }

    pub fn target(&self) -> &Path {
        &self.target_root
    }

    pub fn source(&self) -> &Path {
        &self.source_root
    }
}
