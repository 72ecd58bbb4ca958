//! Deployment engine
//!
//! Orchestrates copy -> customize -> mark-executable -> report for a
//! resolved list of templates. Failures are per-file: a missing source
//! or a write error is counted and the run continues. Declined
//! overwrites are counted separately and are not failures.

mod conflict;

use std::path::Path;

pub use conflict::{
    unified_diff, ConflictChoice, ConflictReason, ConflictResolver, InteractiveResolver,
};

#[cfg(test)]
pub use conflict::testing::MockResolver;

use crate::customize::{self, Bindings};
use crate::fs::{hash_content, FileSystem};

/// Options controlling a deploy run
#[derive(Debug, Clone, Copy, Default)]
pub struct DeployOptions {
    /// Overwrite existing destination files without prompting
    pub force: bool,
    /// Strip inline comments from shell templates before substitution
    pub strip_comments: bool,
}

/// One deploy run: what to copy where, and with which values
#[derive(Debug)]
pub struct DeployRequest<'a> {
    /// Directory the template paths are relative to
    pub source_root: &'a Path,
    /// Destination directory; templates land flat under it
    pub dest_dir: &'a Path,
    /// Resolved template paths, in deploy order
    pub selected: &'a [String],
    /// Shared includes deployed first, verbatim, without prompting
    pub support_files: &'a [String],
    pub bindings: &'a Bindings,
    pub options: DeployOptions,
}

/// Progress event emitted while deploying
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    SupportDeployed {
        name: String,
    },
    SupportMissing {
        name: String,
    },
    SupportFailed {
        name: String,
        message: String,
    },
    Deployed {
        name: String,
        placeholders_filled: usize,
    },
    Declined {
        name: String,
    },
    Failed {
        name: String,
        message: String,
    },
}

/// Aggregate outcome of a deploy run
#[derive(Debug, Clone, Default)]
pub struct DeployReport {
    /// Files copied, customized and marked executable
    pub deployed: Vec<String>,
    /// Files left untouched because the user declined an overwrite
    pub skipped: Vec<String>,
    /// Files that could not be deployed
    pub failed: Vec<String>,
}

impl DeployReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Deploy the selected templates.
///
/// Support files go first and never count toward the report. Each
/// selected template then walks the per-file pipeline; events are
/// emitted through `on_event` as they happen.
pub fn deploy<FS, R, F>(
    fs: &FS,
    resolver: &mut R,
    request: &DeployRequest<'_>,
    mut on_event: F,
) -> DeployReport
where
    FS: FileSystem,
    R: ConflictResolver,
    F: FnMut(DeployEvent),
{
    let mut report = DeployReport::new();

    for rel in request.support_files {
        deploy_support(fs, request, rel, &mut on_event);
    }

    'templates: for rel in request.selected {
        let source = request.source_root.join(rel);
        let file_name = file_name_of(rel);
        let dest = request.dest_dir.join(&file_name);

        let contents = match fs.read_to_string(&source) {
            Ok(contents) => contents,
            Err(_) if !fs.exists(&source) => {
                on_event(DeployEvent::Failed {
                    name: rel.clone(),
                    message: "source file not found".to_string(),
                });
                report.failed.push(rel.clone());
                continue;
            }
            Err(e) => {
                on_event(DeployEvent::Failed {
                    name: rel.clone(),
                    message: e.to_string(),
                });
                report.failed.push(rel.clone());
                continue;
            }
        };

        let (contents, placeholders_filled) = if customize::applies_to(rel) {
            let contents = if request.options.strip_comments {
                customize::strip_inline_comments(&contents)
            } else {
                contents
            };
            customize::substitute(&contents, request.bindings)
        } else {
            (contents, 0)
        };

        if fs.exists(&dest) && !request.options.force {
            let reason = match fs.hash_file(&dest) {
                Ok(hash) if hash == hash_content(contents.as_bytes()) => ConflictReason::Identical,
                _ => ConflictReason::Differs,
            };
            loop {
                match resolver.resolve_conflict(&file_name, reason) {
                    ConflictChoice::Overwrite => break,
                    ConflictChoice::Skip => {
                        on_event(DeployEvent::Declined {
                            name: file_name.clone(),
                        });
                        report.skipped.push(rel.clone());
                        continue 'templates;
                    }
                    ConflictChoice::Diff => {
                        let existing = fs.read_to_string(&dest).unwrap_or_default();
                        resolver.show_diff(&unified_diff(&file_name, &existing, &contents));
                    }
                }
            }
        }

        if let Err(e) = fs
            .write_atomic(&dest, &contents)
            .and_then(|()| fs.set_executable(&dest))
        {
            on_event(DeployEvent::Failed {
                name: file_name.clone(),
                message: e.to_string(),
            });
            report.failed.push(rel.clone());
            continue;
        }

        on_event(DeployEvent::Deployed {
            name: file_name,
            placeholders_filled,
        });
        report.deployed.push(rel.clone());
    }

    report
}

fn deploy_support<FS, F>(
    fs: &FS,
    request: &DeployRequest<'_>,
    rel: &str,
    on_event: &mut F,
) where
    FS: FileSystem,
    F: FnMut(DeployEvent),
{
    let source = request.source_root.join(rel);
    let name = file_name_of(rel);

    let contents = match fs.read_to_string(&source) {
        Ok(contents) => contents,
        Err(_) => {
            on_event(DeployEvent::SupportMissing { name });
            return;
        }
    };

    let dest = request.dest_dir.join(&name);
    match fs
        .write_atomic(&dest, &contents)
        .and_then(|()| fs.set_executable(&dest))
    {
        Ok(()) => on_event(DeployEvent::SupportDeployed { name }),
        Err(e) => on_event(DeployEvent::SupportFailed {
            name,
            message: e.to_string(),
        }),
    }
}

fn file_name_of(rel: &str) -> String {
    rel.rsplit('/').next().unwrap_or(rel).to_string()
}
