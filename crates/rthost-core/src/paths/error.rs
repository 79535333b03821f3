//! Path-related error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering host paths.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// No platform default servicing location is available.
    #[error("Cannot determine default servicing location: {0}")]
    NoDefaultServicingRoot(String),

    /// Failed to locate the running executable.
    #[error("Cannot determine current executable: {0}")]
    CurrentExeError(String),

    /// The executable path has no parent directory.
    #[error("Executable {0} has no parent directory")]
    NoParentDir(PathBuf),

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}
