//! Template registry scanning
//!
//! Enumerates installable template files across the configured
//! category directories and attaches a one-line description to each.
//! The scan is read-only and forgiving: a missing category directory
//! contributes nothing, and unreadable files are omitted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::models::TemplateEntry;

/// Description used when a file carries none on its second line
pub const FALLBACK_DESCRIPTION: &str = "Script";

/// Scan the source root for template files.
///
/// Categories are visited in configuration order; within a category,
/// files are sorted by name so the registry ordering (and therefore
/// the 1-based selection indices) is stable across runs.
pub fn scan(source_root: &Path, config: &Config) -> Vec<TemplateEntry> {
    let mut entries = Vec::new();

    for category in &config.registry.categories {
        let dir = source_root.join(category);
        let Ok(read_dir) = fs::read_dir(&dir) else {
            continue;
        };

        let mut files: Vec<PathBuf> = read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        for path in files {
            if !has_template_extension(&path, config) {
                continue;
            }
            let Ok(contents) = fs::read_to_string(&path) else {
                continue;
            };
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };
            entries.push(TemplateEntry::new(
                format!("{category}/{name}"),
                extract_description(&contents),
            ));
        }
    }

    entries
}

fn has_template_extension(path: &Path, config: &Config) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    config
        .registry
        .template_extensions
        .iter()
        .any(|allowed| allowed == ext)
}

/// Extract the description from line 2 of a template.
///
/// Recognized markers are `#`, `"""` and `'''`; marker characters and
/// surrounding whitespace are stripped.
pub fn extract_description(contents: &str) -> String {
    let Some(line) = contents.lines().nth(1) else {
        return FALLBACK_DESCRIPTION.to_string();
    };
    let line = line.trim();

    let is_comment =
        line.starts_with('#') || line.starts_with("\"\"\"") || line.starts_with("'''");
    if !is_comment {
        return FALLBACK_DESCRIPTION.to_string();
    }

    let description = line
        .trim_start_matches(['#', '"', '\''])
        .trim_end_matches(['"', '\''])
        .trim();
    if description.is_empty() {
        FALLBACK_DESCRIPTION.to_string()
    } else {
        description.to_string()
    }
}
