//! Design tokens for the themeops CLI.
//!
//! Every color and icon the binary prints comes from here.

use crossterm::style::{Color, Stylize};

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
}

/// Semantic icon, rendered per terminal capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
}

impl Icon {
    pub fn as_str(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Success, true) => icons::SUCCESS,
            (Self::Error, true) => icons::ERROR,
            (Self::Warning, true) => icons::WARNING,
            (Self::Arrow, true) => icons::ARROW,
            (Self::Success, false) => icons_ascii::SUCCESS,
            (Self::Error, false) => icons_ascii::ERROR,
            (Self::Warning, false) => icons_ascii::WARNING,
            (Self::Arrow, false) => icons_ascii::ARROW,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Success => colors::SUCCESS,
            Self::Error => colors::ERROR,
            Self::Warning => colors::WARNING,
            Self::Arrow => colors::DIM,
        }
    }

    pub fn render(self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.as_str(supports_unicode);
        if supports_color {
            s.with(self.color()).to_string()
        } else {
            s.to_string()
        }
    }
}

/// Apply `color` when the terminal supports it
pub fn paint(text: &str, color: Color, supports_color: bool) -> String {
    if supports_color {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}
