//! `package.json` merging.

use serde_json::{Map, Value};
use std::{fs, path::Path};
use tracing::debug;

use crate::error::{InstallError, Result};
use crate::types::Project;

/// Top-level manifest fields the fragment contributes to.
pub const MERGED_FIELDS: &[&str] = &["scripts", "devDependencies"];

/// Merges the bundled fragment into the target project's `package.json`.
pub fn update_manifest(project: &Project) -> Result<()> {
    let manifest_path = project.manifest_path();
    if !manifest_path.exists() {
        return Err(InstallError::ManifestNotFound {
            path: project.target().to_path_buf(),
        });
    }

    let mut manifest = read_object(&manifest_path)?;
    let fragment = read_object(&project.fragment_path())?;

    merge_manifest(&mut manifest, &fragment)
        .map_err(|reason| InstallError::manifest_update(&manifest_path, reason))?;

    let mut json = serde_json::to_string_pretty(&Value::Object(manifest))
        .map_err(|e| InstallError::manifest_update(&manifest_path, e))?;
    json.push('\n');
    fs::write(&manifest_path, json).map_err(|e| {
        InstallError::manifest_update(&manifest_path, format!("failed to write: {}", e))
    })?;
    debug!(path = %manifest_path.display(), "manifest written");
    Ok(())
}

/// Shallow-merges each of `MERGED_FIELDS` from `fragment` into `manifest`.
/// Fragment entries win on key collision. Both fields end up present as
/// objects; every other field is left alone.
pub fn merge_manifest(
    manifest: &mut Map<String, Value>,
    fragment: &Map<String, Value>,
) -> std::result::Result<(), String> {
    for &field in MERGED_FIELDS {
        let incoming = match fragment.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::Object(entries)) => Some(entries),
            Some(_) => return Err(format!("boilerplate `{}` is not an object", field)),
        };

        let merged = manifest
            .entry(field)
            .or_insert_with(|| Value::Object(Map::new()));
        if merged.is_null() {
            *merged = Value::Object(Map::new());
        }
        let merged = merged
            .as_object_mut()
            .ok_or_else(|| format!("`{}` in package.json is not an object", field))?;

        for (key, value) in incoming.into_iter().flatten() {
            merged.insert(key.clone(), value.clone());
        }
    }
    Ok(())
}

fn read_object(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path).map_err(|e| {
        InstallError::manifest_update(path, format!("failed to read: {}", e))
    })?;
    match serde_json::from_str(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(InstallError::manifest_update(
            path,
            "does not contain a JSON object",
        )),
        Err(e) => Err(InstallError::manifest_update(
            path,
            format!("failed to parse: {}", e),
        )),
    }
}
