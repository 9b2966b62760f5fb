//! Error types for mudsync
//!
//! Uses `thiserror` for library errors. Per-path file-system failures are not
//! errors at this level: they are aggregated into task outcomes instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mudsync operations
pub type MudResult<T> = Result<T, MudError>;

/// Main error type for mudsync operations
#[derive(Error, Debug)]
pub enum MudError {
    /// Invalid TOML in the project manifest
    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// A root path needed by a task was never configured
    #[error("{root} root is not configured ({hint})")]
    RootNotConfigured {
        root: &'static str,
        hint: &'static str,
    },

    /// Task name not present in the task graph
    #[error("unknown task '{name}'{}", suggestion.as_ref().map(|s| format!(", did you mean '{s}'?")).unwrap_or_default())]
    UnknownTask {
        name: String,
        suggestion: Option<String>,
    },

    /// The change listener could not be installed
    #[error("failed to watch {path}: {message}")]
    Watch { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
