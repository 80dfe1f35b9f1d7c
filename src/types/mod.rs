mod project;
mod run_config;

pub use project::Project;
pub use run_config::{Preset, RunConfig};
