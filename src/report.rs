use crossterm::style::Stylize;
use std::io::{self, Write};

use crate::error::InstallError;
use crate::themes::{Theme, Tone};

const RECOMMENDED_PLUGINS: &[&str] = &["ESLint", "Prettier", "EditorConfig"];

/// Human-facing output for a run. Never affects control flow; write errors
/// are ignored.
pub struct Reporter<W: Write> {
    out: W,
    theme: Theme,
    show_emoji: bool,
    issues_url: String,
}

impl Reporter<io::Stdout> {
    pub fn stdout(theme: Theme, show_emoji: bool, issues_url: impl Into<String>) -> Self {
        Self::new(io::stdout(), theme, show_emoji, issues_url)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, theme: Theme, show_emoji: bool, issues_url: impl Into<String>) -> Self {
        Self {
            out,
            theme,
            show_emoji,
            issues_url: issues_url.into(),
        }
    }

    pub fn progress(&mut self, emoji: &str, message: &str) {
        self.line(Tone::Progress, emoji, message);
    }

    pub fn success(&mut self) {
        let _ = writeln!(self.out);
        self.line(Tone::Success, "💫", "Poetic was installed successfully!");
        self.line(
            Tone::Hint,
            "",
            "   It is recommended to add these plugins to your IDE:",
        );
        for plugin in RECOMMENDED_PLUGINS {
            self.line(Tone::Hint, "", &format!("   {} {}", self.bullet(), plugin));
        }
    }

    pub fn failure(&mut self, error: &InstallError) {
        let _ = writeln!(self.out);
        // A precondition, so no issue link.
        if let InstallError::DirtyWorkingTree { changes } = error {
            self.line(Tone::Failure, "🙈", &error.to_string());
            for change in changes {
                self.line(Tone::Hint, "", &format!("   {}", change));
            }
            let _ = writeln!(self.out);
            return;
        }

        self.line(Tone::Failure, "🆘", &error.to_string());
        let _ = writeln!(self.out);
        self.line(
            Tone::Hint,
            "",
            "To get help with this problem, please submit an issue to: ",
        );
        let url = self.issues_url.clone();
        self.line(Tone::Hint, "", &url);
        let _ = writeln!(self.out);
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn bullet(&self) -> &'static str {
        if self.show_emoji {
            "🔹"
        } else {
            "-"
        }
    }

    fn line(&mut self, tone: Tone, emoji: &str, message: &str) {
        let text = if self.show_emoji && !emoji.is_empty() {
            format!("{}  {}", emoji, message)
        } else {
            message.to_string()
        };

        let _ = match tone.color(self.theme) {
            Some(color) => writeln!(self.out, "{}", text.with(color)),
            None => writeln!(self.out, "{}", text),
        };
    }
}
