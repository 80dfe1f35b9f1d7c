/// Which boilerplate tree to install.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Preset {
    React,
    Vanilla,
}

impl Preset {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Preset::React => "react",
            Preset::Vanilla => "vanilla",
        }
    }
}

/// Options for a single run, fixed once the flags are parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Install the package from a sibling checkout instead of the registry.
    pub local_mode: bool,
    pub preset: Preset,
    /// Keep the project's own lint/format/editor files.
    pub keep_existing_rules: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            local_mode: false,
            preset: Preset::React,
            keep_existing_rules: false,
        }
    }
}
