//! Conflict resolution for deployments
//!
//! Provides the `ConflictResolver` trait for handling destination
//! conflicts. Use `InteractiveResolver` for production (stdin/stderr
//! prompts) or implement a mock resolver for testing.

use similar::TextDiff;

/// Why the destination file conflicts with the incoming copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    /// Destination exists and is byte-identical to the incoming content
    Identical,
    /// Destination exists with different content
    Differs,
}

/// The user's answer to a conflict prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    Overwrite,
    Skip,
    Diff,
}

/// Trait for resolving destination conflicts during a deploy.
pub trait ConflictResolver {
    /// Prompt to resolve a single conflict
    fn resolve_conflict(&mut self, file_name: &str, reason: ConflictReason) -> ConflictChoice;
    /// Display a diff to the user
    fn show_diff(&mut self, diff: &str);
}

/// Generate a unified diff between the existing and incoming content.
pub fn unified_diff(file_name: &str, existing: &str, incoming: &str) -> String {
    TextDiff::from_lines(existing, incoming)
        .unified_diff()
        .header(
            &format!("a/{}", file_name),
            &format!("b/{}", file_name),
        )
        .to_string()
}

/// Interactive conflict resolver using stdin/stderr.
///
/// Default-deny: an empty answer or EOF skips the file.
pub struct InteractiveResolver;

impl InteractiveResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InteractiveResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConflictResolver for InteractiveResolver {
    fn resolve_conflict(&mut self, file_name: &str, reason: ConflictReason) -> ConflictChoice {
        use std::io::{self, Write};

        let reason_msg = match reason {
            ConflictReason::Identical => "already exists with identical content",
            ConflictReason::Differs => "already exists with different content",
        };

        loop {
            eprintln!("\nFile exists: {} {}", file_name, reason_msg);
            eprint!("[o]verwrite / [s]kip / [d]iff? [s] ");
            let _ = io::stderr().flush();

            let mut input = String::new();
            match io::stdin().read_line(&mut input) {
                Ok(0) | Err(_) => return ConflictChoice::Skip,
                Ok(_) => {}
            }

            match input.trim() {
                "o" | "O" | "y" | "Y" => return ConflictChoice::Overwrite,
                "" | "s" | "S" | "n" | "N" => return ConflictChoice::Skip,
                "d" | "D" => return ConflictChoice::Diff,
                _ => continue,
            }
        }
    }

    fn show_diff(&mut self, diff: &str) {
        eprintln!("\n{}", diff);
    }
}
