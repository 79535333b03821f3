//! Platform-specific default locations and user path normalization.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Directory name of the servicing location under the platform's program root.
pub const DEFAULT_SERVICING_DIR_NAME: &str = "Servicing";

/// Get the well-known default servicing root for this platform.
///
/// - Windows: `%ProgramFiles(x86)%\rthost\Servicing`, else `%ProgramFiles%\rthost\Servicing`
/// - Other: `/usr/local/share/rthost/servicing`
pub fn default_servicing_root() -> Result<PathBuf, PathError> {
    #[cfg(target_os = "windows")]
    {
        let program_files = env::var_os("ProgramFiles(x86)")
            .filter(|value| !value.is_empty())
            .or_else(|| env::var_os("ProgramFiles").filter(|value| !value.is_empty()))
            .ok_or_else(|| {
                PathError::NoDefaultServicingRoot(
                    "neither ProgramFiles(x86) nor ProgramFiles is set".to_string(),
                )
            })?;
        Ok(PathBuf::from(program_files)
            .join("rthost")
            .join(DEFAULT_SERVICING_DIR_NAME))
    }

    #[cfg(not(target_os = "windows"))]
    {
        Ok(PathBuf::from("/usr/local/share/rthost")
            .join(DEFAULT_SERVICING_DIR_NAME.to_ascii_lowercase()))
    }
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
///
/// Blank input stays empty: an empty explicit root is a configuration error
/// the resolver reports, not something to paper over here.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(PathBuf::new());
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
