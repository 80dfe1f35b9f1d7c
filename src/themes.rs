use crossterm::style::Color;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    NoColor,
}

/// What a line of output is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Progress,
    Success,
    Failure,
    Hint,
}

impl Tone {
    /// `None` means print unstyled.
    pub fn color(&self, theme: Theme) -> Option<Color> {
        match theme {
            Theme::NoColor => None,
            Theme::Dark => Some(match self {
                Tone::Progress => Color::Rgb { r: 0, g: 191, b: 255 }, // Deep sky blue
                Tone::Success => Color::Rgb { r: 0, g: 255, b: 0 },   // Bright green
                Tone::Failure => Color::Rgb { r: 255, g: 99, b: 71 }, // Tomato
                Tone::Hint => Color::Rgb { r: 169, g: 169, b: 169 },  // Dark gray
            }),
            Theme::Light => Some(match self {
                Tone::Progress => Color::Rgb { r: 0, g: 102, b: 204 }, // Dark blue
                Tone::Success => Color::Rgb { r: 0, g: 128, b: 0 },    // Dark green
                Tone::Failure => Color::Rgb { r: 178, g: 34, b: 34 },  // Firebrick
                Tone::Hint => Color::Rgb { r: 64, g: 64, b: 64 },
            }),
        }
    }
}
