//! shipkit - installer for customizable container helper scripts
//!
//! shipkit maintains a small registry of helper-script templates
//! (container lifecycle, dev tooling, utilities), lets the user pick a
//! subset interactively, fills per-project placeholder values into the
//! picked templates, and deploys the results into a target directory
//! with conflict prompts and a summary report.

pub mod config;
pub mod customize;
pub mod deploy;
pub mod error;
pub mod fs;
pub mod models;
pub mod registry;
pub mod selector;
pub mod ui;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use customize::{applies_to, strip_inline_comments, substitute, Bindings, PlaceholderSpec};
pub use deploy::{
    deploy, ConflictChoice, ConflictReason, ConflictResolver, DeployEvent, DeployOptions,
    DeployReport, DeployRequest, InteractiveResolver,
};
pub use error::{ShipkitError, ShipkitResult};
pub use fs::{FileSystem, LocalFileSystem};
pub use models::TemplateEntry;
pub use registry::scan;
pub use selector::{resolve, Resolution};
pub use ui::UiContext;
