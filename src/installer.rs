//! Copies a boilerplate tree into the target project.
//!
//! In preservation mode a fixed set of config files is snapshotted into a
//! staging directory before the copy and laid back on top afterwards, so the
//! project's own rules survive. Everything else the boilerplate ships always
//! overwrites what is there.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::cancel::CancellationToken;
use crate::error::{InstallError, Result};
use crate::types::Preset;

/// Files kept intact when the user asks to keep their existing rules.
pub const PRESERVED_FILES: &[&str] = &[
    ".vscode/settings.json",
    ".editorconfig",
    ".eslintignore",
    ".eslintrc.js",
    ".prettierrc.js",
];

pub fn boilerplate_dir(source_root: &Path, preset: Preset) -> PathBuf {
    source_root.join("boilerplate").join(preset.dir_name())
}

pub fn install_config_files(
    source_root: &Path,
    target_root: &Path,
    preset: Preset,
    preserve: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let source = boilerplate_dir(source_root, preset);
    if !source.is_dir() {
        return Err(InstallError::copy(
            &source,
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "boilerplate directory is missing",
            ),
        ));
    }

    if !preserve {
        return copy_tree(&source, target_root, cancel);
    }

    info!("retaining existing rules");
    let staging = tempfile::Builder::new()
        .prefix("poetic-keep-")
        .tempdir()
        .map_err(|e| InstallError::copy(std::env::temp_dir(), e))?;

    let kept = snapshot_preserved(target_root, staging.path(), cancel)?;
    debug!(?kept, staging = %staging.path().display(), "snapshot taken");

    copy_tree(&source, target_root, cancel)?;
    copy_tree(staging.path(), target_root, cancel)?;

    let staging_path = staging.path().to_path_buf();
    staging
        .close()
        .map_err(|e| InstallError::copy(staging_path, e))
}

/// Copies every allow-listed path that exists under `target_root` into
/// `staging`, keeping relative paths. Returns the paths that were kept.
fn snapshot_preserved(
    target_root: &Path,
    staging: &Path,
    cancel: &CancellationToken,
) -> Result<Vec<&'static str>> {
    let mut kept = Vec::new();
    for &relative in PRESERVED_FILES {
        let existing = target_root.join(relative);
        if !existing.exists() {
            continue;
        }
        cancel.check()?;
        let staged = staging.join(relative);
        if existing.is_dir() {
            copy_tree(&existing, &staged, cancel)?;
        } else {
            copy_file(&existing, &staged)?;
        }
        kept.push(relative);
    }
    Ok(kept)
}

/// Recursively copies `source` over `target`, overwriting colliding files.
pub fn copy_tree(source: &Path, target: &Path, cancel: &CancellationToken) -> Result<()> {
    fs::create_dir_all(target).map_err(|e| InstallError::copy(target, e))?;

    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        cancel.check()?;
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            InstallError::copy(path, e.into())
        })?;

        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| InstallError::copy(entry.path(), std::io::Error::other(e)))?;
        let destination = target.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination).map_err(|e| InstallError::copy(&destination, e))?;
        } else {
            copy_file(entry.path(), &destination)?;
        }
    }
    Ok(())
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(|e| InstallError::copy(parent, e))?;
    }
    fs::copy(from, to).map_err(|e| InstallError::copy(to, e))?;
    debug!(from = %from.display(), to = %to.display(), "copied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn read(root: &Path, relative: &str) -> String {
        fs::read_to_string(root.join(relative)).unwrap()
    }

    fn source_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let react = dir.path().join("boilerplate/react");
        write(&react, ".eslintrc.js", "boilerplate eslint");
        write(&react, ".prettierrc.js", "boilerplate prettier");
        write(&react, ".vscode/settings.json", "boilerplate settings");
        write(&react, ".stylelintrc", "boilerplate stylelint");
        let vanilla = dir.path().join("boilerplate/vanilla");
        write(&vanilla, ".eslintrc.js", "vanilla eslint");
        dir
    }

    #[test]
    fn copies_selected_preset() {
        let source = source_root();
        let target = tempfile::tempdir().unwrap();

        install_config_files(
            source.path(),
            target.path(),
            Preset::Vanilla,
            false,
            &CancellationToken::new(),
        )
        .unwrap();

        assert_eq!(read(target.path(), ".eslintrc.js"), "vanilla eslint");
        assert!(!target.path().join(".prettierrc.js").exists());
    }

    #[test]
    fn overwrites_existing_files_without_preservation() {
        let source = source_root();
        let target = tempfile::tempdir().unwrap();
        write(target.path(), ".eslintrc.js", "mine");
        write(target.path(), ".vscode/settings.json", "my settings");

        install_config_files(
            source.path(),
            target.path(),
            Preset::React,
            false,
            &CancellationToken::new(),
        )
        .unwrap();

        assert_eq!(read(target.path(), ".eslintrc.js"), "boilerplate eslint");
        assert_eq!(
            read(target.path(), ".vscode/settings.json"),
            "boilerplate settings"
        );
    }

    #[test]
    fn preserves_allow_listed_files() {
        let source = source_root();
        let target = tempfile::tempdir().unwrap();
        write(target.path(), ".eslintrc.js", "mine");
        write(target.path(), ".vscode/settings.json", "my settings");
        write(target.path(), ".stylelintrc", "my stylelint");

        install_config_files(
            source.path(),
            target.path(),
            Preset::React,
            true,
            &CancellationToken::new(),
        )
        .unwrap();

        assert_eq!(read(target.path(), ".eslintrc.js"), "mine");
        assert_eq!(read(target.path(), ".vscode/settings.json"), "my settings");
        // absent before, so the boilerplate version lands
        assert_eq!(
            read(target.path(), ".prettierrc.js"),
            "boilerplate prettier"
        );
        // not on the allow-list
        assert_eq!(read(target.path(), ".stylelintrc"), "boilerplate stylelint");
    }

    #[test]
    fn interrupted_copy_stops() {
        let source = source_root();
        let target = tempfile::tempdir().unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = install_config_files(source.path(), target.path(), Preset::React, true, &cancel)
            .unwrap_err();

        assert!(matches!(err, InstallError::Interrupted));
        assert!(!target.path().join(".eslintrc.js").exists());
    }

    #[test]
    fn missing_boilerplate_is_a_copy_error() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();

        let err = install_config_files(
            source.path(),
            target.path(),
            Preset::React,
            false,
            &CancellationToken::new(),
        )
        .unwrap_err();

        match err {
            InstallError::Copy { path, .. } => assert!(path.ends_with("boilerplate/react")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
