#![allow(dead_code)]

use anyhow::{bail, Result};
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct TestProject {
    pub dir: PathBuf,
}

impl TestProject {
    pub fn create_file(&self, path: &str, content: &str) -> Result<()> {
        let full_path = self.dir.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content)?;
        Ok(())
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        Ok(fs::read_to_string(self.dir.join(path))?)
    }

    pub fn read_json(&self, path: &str) -> Result<Value> {
        Ok(serde_json::from_str(&self.read_file(path)?)?)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.dir.join(path).exists()
    }

    pub fn git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args([
                "-c",
                "user.name=Poetic Test",
                "-c",
                "user.email=test@example.com",
                "-c",
                "init.defaultBranch=main",
            ])
            .args(args)
            .current_dir(&self.dir)
            .output()?;
        if !output.status.success() {
            bail!(
                "git {:?} failed: {}",
                args,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    pub fn commit_all(&self) -> Result<()> {
        self.git(&["add", "-A"])?;
        self.git(&["commit", "-q", "-m", "initial"])?;
        Ok(())
    }

    pub fn status(&self) -> Result<String> {
        self.git(&["status", "--porcelain"])
    }
}

pub fn git_available() -> bool {
    which::which("git").is_ok()
}

pub const ORIGINAL_MANIFEST: &str = "{\n  \"name\": \"demo-app\",\n  \"private\": true,\n  \"scripts\": {\n    \"build\": \"x\"\n  },\n  \"devDependencies\": {\n    \"left-pad\": \"1.0.0\"\n  }\n}\n";

/// A committed git repository holding a small JavaScript project.
pub fn create_committed_node_project(dir: &Path) -> Result<TestProject> {
    let project = TestProject {
        dir: dir.to_path_buf(),
    };
    fs::create_dir_all(dir)?;
    project.git(&["init", "-q"])?;
    project.create_file("package.json", ORIGINAL_MANIFEST)?;
    project.create_file("src/index.js", "console.log(\"hello\");\n")?;
    project.commit_all()?;
    Ok(project)
}

/// A committed git repository without a `package.json`.
pub fn create_committed_empty_project(dir: &Path) -> Result<TestProject> {
    let project = TestProject {
        dir: dir.to_path_buf(),
    };
    fs::create_dir_all(dir)?;
    project.git(&["init", "-q"])?;
    project.create_file("README.md", "# demo\n")?;
    project.commit_all()?;
    Ok(project)
}

/// Writes a `yarn` stand-in into `bin_dir` that records its arguments in
/// `yarn-args.txt` and exits with `exit_code`.
#[cfg(unix)]
pub fn fake_yarn(bin_dir: &Path, exit_code: i32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(bin_dir)?;
    let script = bin_dir.join("yarn");
    fs::write(
        &script,
        format!("#!/bin/sh\necho \"$@\" > yarn-args.txt\nexit {}\n", exit_code),
    )?;
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

/// `PATH` with `bin_dir` in front.
pub fn path_with(bin_dir: &Path) -> OsString {
    let existing = std::env::var_os("PATH").unwrap_or_default();
    std::env::join_paths(
        std::iter::once(bin_dir.to_path_buf()).chain(std::env::split_paths(&existing)),
    )
    .unwrap()
}

pub fn bundled_assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

pub fn bundled_fragment() -> Result<Value> {
    let content = fs::read_to_string(bundled_assets().join("package.boilerplate.json"))?;
    Ok(serde_json::from_str(&content)?)
}
