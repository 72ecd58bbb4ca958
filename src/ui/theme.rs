//! Design tokens for the shipkit CLI.
//!
//! Design constraints:
//! - Only the semantic colors in `colors::*`
//! - All icons must be sourced from this module

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const ACCENT: Color = Color::Blue;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const INFO: &str = "•";
    pub const QUESTION: &str = "?";
    pub const ARROW: &str = "↳";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const INFO: &str = "[*]";
    pub const QUESTION: &str = "[?]";
    pub const ARROW: &str = "[>]";
}

/// Semantic icon, resolved to unicode or ASCII at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
    Question,
    Arrow,
}

impl Icon {
    pub fn render(&self, unicode: bool) -> &'static str {
        if unicode {
            match self {
                Icon::Success => icons::SUCCESS,
                Icon::Error => icons::ERROR,
                Icon::Warning => icons::WARNING,
                Icon::Info => icons::INFO,
                Icon::Question => icons::QUESTION,
                Icon::Arrow => icons::ARROW,
            }
        } else {
            match self {
                Icon::Success => icons_ascii::SUCCESS,
                Icon::Error => icons_ascii::ERROR,
                Icon::Warning => icons_ascii::WARNING,
                Icon::Info => icons_ascii::INFO,
                Icon::Question => icons_ascii::QUESTION,
                Icon::Arrow => icons_ascii::ARROW,
            }
        }
    }
}
