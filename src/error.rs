//! Error types for shipkit
//!
//! Uses `thiserror` for library errors; the binary layer wraps these
//! in `anyhow` for user-facing reporting.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shipkit operations
pub type ShipkitResult<T> = Result<T, ShipkitError>;

/// Main error type for shipkit operations
#[derive(Error, Debug)]
pub enum ShipkitError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid shipkit.toml
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}
