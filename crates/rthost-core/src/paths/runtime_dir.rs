//! Original (pre-servicing) runtime directory discovery.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::normalize_user_path;

/// Environment variable naming the original runtime directory.
pub const RUNTIME_DIR_ENV: &str = "RTHOST_RUNTIME_DIR";

/// How the original runtime directory was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeDirSource {
    Explicit,
    EnvVar,
    /// Directory containing the running host executable.
    ExecutableDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeDirResolution {
    pub path: PathBuf,
    pub source: RuntimeDirSource,
}

/// Resolve the original runtime directory.
///
/// Resolution order:
/// 1. Explicit path provided by caller
/// 2. `RTHOST_RUNTIME_DIR` environment variable
/// 3. The directory the host executable lives in
pub fn resolve_original_runtime_dir(
    explicit: Option<&str>,
) -> Result<RuntimeDirResolution, PathError> {
    if let Some(path_str) = explicit.filter(|value| !value.trim().is_empty()) {
        return Ok(RuntimeDirResolution {
            path: normalize_user_path(path_str)?,
            source: RuntimeDirSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(RUNTIME_DIR_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(RuntimeDirResolution {
                path: normalize_user_path(&env_path)?,
                source: RuntimeDirSource::EnvVar,
            });
        }
    }

    let exe = env::current_exe().map_err(|e| PathError::CurrentExeError(e.to_string()))?;
    let dir = exe
        .parent()
        .map(std::path::Path::to_path_buf)
        .ok_or_else(|| PathError::NoParentDir(exe.clone()))?;

    Ok(RuntimeDirResolution {
        path: dir,
        source: RuntimeDirSource::ExecutableDir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};

    #[cfg(unix)]
    #[test]
    fn explicit_runtime_dir() {
        let resolved = resolve_original_runtime_dir(Some("/opt/rthost/runtime")).unwrap();
        assert_eq!(resolved.source, RuntimeDirSource::Explicit);
        assert_eq!(resolved.path, PathBuf::from("/opt/rthost/runtime"));
    }

    #[test]
    fn env_runtime_dir() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(RUNTIME_DIR_ENV, "/tmp/rt-from-env");

        let resolved = resolve_original_runtime_dir(None).unwrap();
        assert_eq!(resolved.source, RuntimeDirSource::EnvVar);
        assert!(resolved.path.ends_with("rt-from-env"));
    }

    #[test]
    fn falls_back_to_executable_dir() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::unset(RUNTIME_DIR_ENV);

        let resolved = resolve_original_runtime_dir(Some("  ")).unwrap();
        assert_eq!(resolved.source, RuntimeDirSource::ExecutableDir);
        assert!(resolved.path.is_dir());
    }
}
