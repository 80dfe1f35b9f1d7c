use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::package_managers::NodePackageManager;
use crate::themes::Theme;

pub const DEFAULT_ISSUES_URL: &str = "https://github.com/arianacosta/poetic/issues";

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Registry name of the package added as a dev dependency.
    pub package_name: String,
    /// Path handed to the package manager in `--local` mode.
    pub local_path: String,
    #[serde(default)]
    pub package_manager: Option<NodePackageManager>,
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
    pub issues_url: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_show_emoji")]
    pub show_emoji: bool,
}

impl Settings {
    /// Loads settings for the project in `project_dir`.
    pub fn new(project_dir: &Path) -> Result<Self, ConfigError> {
        Self::from_file(&Self::get_config_path(project_dir))
    }

    /// Defaults, then `config_path` if it exists, then `POETIC_*` variables.
    pub fn from_file(config_path: &Path) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("package_name", "poetic")?
            .set_default("local_path", "../poetic")?
            .set_default("issues_url", DEFAULT_ISSUES_URL)?
            .set_default("theme", "dark")?
            .add_source(File::from(config_path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("POETIC"))
            .build()?;

        s.try_deserialize()
    }

    fn get_config_path(project_dir: &Path) -> PathBuf {
        // First check the target project
        let local_config = project_dir.join(".poetic.toml");

        if local_config.exists() {
            return local_config;
        }

        // Fall back to home directory
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".poetic.toml")
    }

    pub fn get_effective_theme(&self, cli_theme: Option<Theme>) -> Theme {
        // Priority order:
        // 1. CLI argument (if present)
        // 2. Environment variable NO_COLOR (if present)
        // 3. Config file / POETIC_THEME
        if let Some(theme) = cli_theme {
            return theme;
        }

        if std::env::var_os("NO_COLOR").is_some() {
            return Theme::NoColor;
        }

        self.theme
    }

    /// Where the boilerplate trees and manifest fragment live.
    pub fn source_root(&self, cli_assets: Option<&Path>) -> PathBuf {
        if let Some(dir) = cli_assets.or(self.assets_dir.as_deref()) {
            return dir.to_path_buf();
        }

        let beside_executable = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .filter(|dir| dir.is_dir());

        beside_executable
            .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets")))
    }

    pub fn package_source(&self, local_mode: bool) -> &str {
        if local_mode {
            &self.local_path
        } else {
            &self.package_name
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            "nocolor" => Ok(Theme::NoColor),
            _ => Err(format!("Invalid theme: {}", s)),
        }
    }
}

fn default_show_emoji() -> bool {
    true
}
