use serde::Deserialize;
use std::{path::Path, process::Command};

use super::PackageManager;
use crate::error::{InstallError, Result};
use crate::execution::{display_command, run_attached};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodePackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl NodePackageManager {
    pub fn detect(dir: &Path) -> Option<Self> {
        if !dir.join("package.json").exists() {
            return None;
        }
        // Check lock files first
        if dir.join("bun.lockb").exists() {
            return Some(Self::Bun);
        } else if dir.join("pnpm-lock.yaml").exists() {
            return Some(Self::Pnpm);
        } else if dir.join("yarn.lock").exists() {
            return Some(Self::Yarn);
        } else if dir.join("package-lock.json").exists() {
            return Some(Self::Npm);
        }

        // Check config files as fallback
        if dir.join(".npmrc").exists() {
            let mentions_pnpm = std::fs::read_to_string(dir.join(".npmrc"))
                .map_or(false, |content| content.contains("pnpm"));
            return Some(if mentions_pnpm { Self::Pnpm } else { Self::Npm });
        } else if dir.join(".yarnrc").exists() || dir.join(".yarnrc.yml").exists() {
            return Some(Self::Yarn);
        }

        None
    }

    pub fn program(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    pub fn add_dev_command(&self, source: &str) -> Command {
        let mut cmd = Command::new(self.program());
        match self {
            Self::Npm => {
                cmd.args(["install", "--save-dev", source]);
            }
            Self::Yarn => {
                cmd.args(["add", source, "--dev"]);
            }
            Self::Pnpm => {
                cmd.args(["add", "--save-dev", source]);
            }
            Self::Bun => {
                cmd.args(["add", "--dev", source]);
            }
        }
        cmd
    }
}

impl PackageManager for NodePackageManager {
    fn name(&self) -> String {
        self.program().to_string()
    }

    fn add_dev_dependency(&self, root: &Path, source: &str) -> Result<()> {
        let command = self.add_dev_command(source);
        let rendered = display_command(&command);
        let failed = |message: String| InstallError::PackageInstall {
            package: source.to_string(),
            message,
        };

        let status = run_attached(command, root).map_err(failed)?;
        if !status.success() {
            let code = status
                .code()
                .map_or_else(|| "a signal".to_string(), |c| format!("code {}", c));
            return Err(failed(format!("`{}` exited with {}", rendered, code)));
        }
        Ok(())
    }
}
