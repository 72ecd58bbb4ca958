//! Selection expression resolution
//!
//! Turns a user selection string into a concrete ordered list of
//! template paths. Three forms are understood: the `all` keyword, the
//! `core` preset, and whitespace-separated 1-based indices into the
//! registry listing.

use crate::models::TemplateEntry;

/// Selection keyword resolving to the whole registry
pub const ALL_KEYWORD: &str = "all";

/// Selection keyword resolving to the configured core preset
pub const CORE_KEYWORD: &str = "core";

/// Outcome of resolving a selection expression
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Resolved template paths, deduplicated, first-seen order
    pub selected: Vec<String>,
    /// Tokens that were neither valid indices nor keywords
    pub dropped: Vec<String>,
}

/// Resolve a selection expression against the registry.
///
/// Invalid or out-of-range tokens never abort resolution; they are
/// collected in `dropped` so the caller can warn about them. Preset
/// members absent from the registry are silently omitted. Repeated
/// indices are deduplicated, first occurrence wins.
pub fn resolve(selection: &str, registry: &[TemplateEntry], core_preset: &[String]) -> Resolution {
    let selection = selection.trim();

    if selection == ALL_KEYWORD {
        return Resolution {
            selected: registry.iter().map(|e| e.relative_path.clone()).collect(),
            dropped: Vec::new(),
        };
    }

    if selection == CORE_KEYWORD {
        let selected = core_preset
            .iter()
            .filter(|path| registry.iter().any(|e| &e.relative_path == *path))
            .cloned()
            .collect();
        return Resolution {
            selected,
            dropped: Vec::new(),
        };
    }

    let mut resolution = Resolution::default();
    for token in selection.split_whitespace() {
        match token.parse::<usize>() {
            Ok(index) if (1..=registry.len()).contains(&index) => {
                let path = &registry[index - 1].relative_path;
                if !resolution.selected.iter().any(|p| p == path) {
                    resolution.selected.push(path.clone());
                }
            }
            _ => resolution.dropped.push(token.to_string()),
        }
    }
    resolution
}
