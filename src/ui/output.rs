//! Themed line output for the CLI
//!
//! `UiContext` is constructed once at process start and passed to
//! everything that prints, so color and unicode decisions live in one
//! place instead of being re-derived per call site.

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

use super::theme::{colors, Icon};

/// Presentation context for all CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
    pub verbose: u8,
}

impl UiContext {
    /// Detect capabilities from the environment.
    ///
    /// Color is disabled for JSON output, non-TTY stdout, `NO_COLOR`,
    /// `SHIPKIT_NO_COLOR`, or a dumb terminal.
    pub fn detect(json: bool, verbose: u8) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some()
            || std::env::var_os("SHIPKIT_NO_COLOR").is_some();
        let term_dumb = std::env::var("TERM")
            .map(|t| t.eq_ignore_ascii_case("dumb"))
            .unwrap_or(false);
        let is_tty = std::io::stdout().is_terminal();

        Self {
            json,
            color: is_tty && !json && !no_color && !term_dumb,
            unicode: unicode_locale() && !term_dumb,
            verbose,
        }
    }

    /// Plain context for tests and machine output
    pub fn plain(json: bool) -> Self {
        Self {
            json,
            color: false,
            unicode: false,
            verbose: 0,
        }
    }

    pub fn success(&self, message: impl AsRef<str>) {
        if self.json {
            return;
        }
        println!("{}", self.line(Icon::Success, colors::SUCCESS, message.as_ref()));
    }

    pub fn error(&self, message: impl AsRef<str>) {
        if self.json {
            return;
        }
        eprintln!("{}", self.line(Icon::Error, colors::ERROR, message.as_ref()));
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        if self.json {
            return;
        }
        eprintln!("{}", self.line(Icon::Warning, colors::WARNING, message.as_ref()));
    }

    pub fn info(&self, message: impl AsRef<str>) {
        if self.json {
            return;
        }
        println!("{}", self.line(Icon::Info, colors::INFO, message.as_ref()));
    }

    pub fn header(&self, title: impl AsRef<str>) {
        if self.json {
            return;
        }
        if self.color {
            println!("{}", title.as_ref().bold());
        } else {
            println!("{}", title.as_ref());
        }
    }

    pub fn detail(&self, message: impl AsRef<str>) {
        if self.json {
            return;
        }
        println!("  {}", self.paint(message.as_ref(), colors::DIM));
    }

    fn line(&self, icon: Icon, color: Color, message: &str) -> String {
        format!(
            "{} {}",
            self.paint(icon.render(self.unicode), color),
            message
        )
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }
}

fn unicode_locale() -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for key in KEYS {
        if let Ok(val) = std::env::var(key) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
        }
    }
    // Modern terminals default to UTF-8 even without locale hints
    true
}
