//! Error types for the harborui token subsystem.

use std::path::PathBuf;

use thiserror::Error;

/// Theme construction and lookup errors.
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("theme not found: {0}")]
    NotFound(String),

    #[error("unresolved palette reference {family}.{shade} for token '{token}'")]
    InvalidReference {
        token: String,
        family: String,
        shade: u16,
    },
}

/// Token build pipeline errors.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("token source unreadable: {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("token source invalid: {0}")]
    SourceInvalid(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
