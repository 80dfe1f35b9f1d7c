use std::{path::Path, process::Command};

use crate::error::{InstallError, Result};
use crate::execution::capture;

/// The version-control operations the installer depends on.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl {
    /// Fails with `DirtyWorkingTree` if anything is pending, tracked or not.
    fn check_clean(&self, root: &Path) -> Result<()>;

    /// Discards every change since the last commit, including untracked
    /// files and directories.
    fn hard_reset_and_clean(&self, root: &Path) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Git;

impl Git {
    fn run(&self, root: &Path, operation: &'static str, args: &[&str]) -> Result<String> {
        let mut command = Command::new("git");
        command.args(args);
        let output = capture(command, root).map_err(|e| InstallError::VersionControl {
            operation,
            message: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(InstallError::VersionControl {
                operation,
                message: stderr.trim().to_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VersionControl for Git {
    fn check_clean(&self, root: &Path) -> Result<()> {
        let status = self.run(root, "status", &["status", "--porcelain"])?;
        let changes = parse_porcelain(&status);
        if changes.is_empty() {
            Ok(())
        } else {
            Err(InstallError::DirtyWorkingTree { changes })
        }
    }

    fn hard_reset_and_clean(&self, root: &Path) -> Result<()> {
        self.run(root, "reset", &["reset", "--hard"])?;
        self.run(root, "clean", &["clean", "-fd"])?;
        Ok(())
    }
}

fn parse_porcelain(status: &str) -> Vec<String> {
    status
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn git(root: &Path, args: &[&str]) {
        let output = Command::new("git")
            .args(["-c", "user.name=Poetic Test", "-c", "user.email=test@example.com"])
            .args(args)
            .current_dir(root)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git {:?}: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    #[test]
    fn empty_status_has_no_changes() {
        assert!(parse_porcelain("").is_empty());
        assert!(parse_porcelain("\n  \n").is_empty());
    }

    #[test]
    fn porcelain_lines_are_changes() {
        let changes = parse_porcelain(" M package.json\n?? .eslintrc.js\n");
        assert_eq!(changes, vec![" M package.json", "?? .eslintrc.js"]);
    }

    #[test]
    fn reset_and_clean_twice_restores_last_commit() {
        if which::which("git").is_err() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        git(root, &["init", "-q"]);
        fs::write(root.join("package.json"), "{}\n").unwrap();
        git(root, &["add", "-A"]);
        git(root, &["commit", "-q", "-m", "initial"]);

        fs::write(root.join("package.json"), "{\"scripts\": {}}\n").unwrap();
        fs::create_dir_all(root.join(".vscode")).unwrap();
        fs::write(root.join(".vscode/settings.json"), "{}\n").unwrap();
        assert!(matches!(
            Git.check_clean(root),
            Err(InstallError::DirtyWorkingTree { .. })
        ));

        Git.hard_reset_and_clean(root).unwrap();
        Git.hard_reset_and_clean(root).unwrap();

        Git.check_clean(root).unwrap();
        assert_eq!(
            fs::read_to_string(root.join("package.json")).unwrap(),
            "{}\n"
        );
        assert!(!root.join(".vscode").exists());
    }
}
