//! Package manager error types.

use thiserror::Error;

/// Errors that can occur in the package manager facade.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// A named package is not in the registry. Recoverable: the previous
    /// selection stays in effect.
    #[error("unknown package '{0}'")]
    UnknownPackage(String),

    /// Configuration error, e.g. a required directory is not set.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem error creating user data directories.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
