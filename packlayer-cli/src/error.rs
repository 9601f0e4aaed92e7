//! CLI error type.

use thiserror::Error;

/// Errors surfaced to the command line user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration problem the user can fix, with remediation text.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Manager(#[from] packlayer::ManagerError),

    /// A resource lookup came up empty.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
