//! Error types for servicing resolution.
//!
//! Exactly two failure kinds exist. Both are terminal for the call; the
//! bootstrap sequencer decides whether to abort or fall back further.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`super::ServicingResolver::resolve`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServicingError {
    /// An explicitly requested location (or the fallback runtime directory)
    /// is missing or unusable.
    #[error("Servicing configuration error for '{path}': {reason}")]
    Configuration { path: PathBuf, reason: String },

    /// The servicing root exists but its payload is incomplete or malformed.
    #[error("Servicing validation error in '{path}': {component}: {reason}")]
    Validation {
        path: PathBuf,
        /// The missing or malformed piece (index file, entry, binary, ...)
        component: String,
        reason: String,
    },
}

impl ServicingError {
    pub fn configuration(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn validation(
        path: impl Into<PathBuf>,
        component: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            path: path.into(),
            component: component.into(),
            reason: reason.into(),
        }
    }

    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type alias for servicing operations
pub type ServicingResult<T> = Result<T, ServicingError>;
