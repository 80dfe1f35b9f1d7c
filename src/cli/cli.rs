use clap::Parser;
use std::path::PathBuf;

use crate::config::Settings;
use crate::themes::Theme;
use crate::types::{Preset, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "poetic")]
#[command(author = "Ariana Costa")]
#[command(version)]
#[command(about = "Installs Poetic's ESLint, Prettier and EditorConfig setup into a JavaScript project", long_about = None)]
pub struct Cli {
    /// Install the package from a local checkout (../poetic) instead of the registry
    #[arg(long)]
    pub local: bool,

    /// Use the plain JavaScript boilerplate instead of the React one
    #[arg(long = "noreact")]
    pub no_react: bool,

    /// Keep existing .eslintrc.js, .prettierrc.js, .editorconfig, .eslintignore and .vscode/settings.json
    #[arg(long = "keeprules")]
    pub keep_rules: bool,

    /// Install into a specific directory instead of the current directory
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Directory containing the bundled boilerplate assets
    #[arg(long, env = "POETIC_ASSETS")]
    pub assets: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set the color theme (dark, light or nocolor)
    #[arg(long)]
    pub theme: Option<Theme>,
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            local_mode: self.local,
            preset: if self.no_react {
                Preset::Vanilla
            } else {
                Preset::React
            },
            keep_existing_rules: self.keep_rules,
        }
    }

    pub fn get_effective_theme(&self, settings: &Settings) -> Theme {
        settings.get_effective_theme(self.theme)
    }
}
