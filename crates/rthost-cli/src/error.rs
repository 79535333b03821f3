//! CLI-specific error types and exit code mapping.

use rthost_core::{PathError, ServicingError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Servicing resolution failed.
    #[error(transparent)]
    Servicing(#[from] ServicingError),

    /// Path discovery failed.
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where a category fits:
    /// - 2: Invalid arguments
    /// - 65: Servicing payload failed validation (`EX_DATAERR`)
    /// - 74: Path discovery failed (`EX_IOERR`)
    /// - 78: Servicing configuration error (`EX_CONFIG`)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Servicing(ServicingError::Configuration { .. }) => 78,
            Self::Servicing(ServicingError::Validation { .. }) => 65,
            Self::Path(_) => 74,
            Self::Arguments(_) => 2,
        }
    }
}

/// Exit code for any error surfaced to `main`.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>()
        .map_or(1, CliError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn servicing_errors_map_to_distinct_codes() {
        let config: CliError = ServicingError::configuration("", "servicing root is empty").into();
        let invalid: CliError =
            ServicingError::validation("/opt/svc", "servicing.inf", "missing").into();

        assert_eq!(config.exit_code(), 78);
        assert_eq!(invalid.exit_code(), 65);
    }

    #[test]
    fn anyhow_wrapped_errors_keep_exit_code() {
        let err = anyhow::Error::new(CliError::Arguments("bad".to_string()));
        assert_eq!(exit_code_for(&err), 2);

        let other = anyhow::anyhow!("unexpected");
        assert_eq!(exit_code_for(&other), 1);
    }
}
