//! Servicing root discovery.
//!
//! Decides which directory is the servicing root and whether it was chosen
//! implicitly (platform default) or explicitly (flag or environment).

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::{default_servicing_root, normalize_user_path};
use crate::servicing::ServicingLocation;

/// Environment variable naming an explicit servicing root.
pub const SERVICING_ROOT_ENV: &str = "RTHOST_SERVICING_ROOT";

/// How the servicing root was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServicingRootSource {
    /// The caller passed an explicit path (e.g., CLI flag).
    Explicit,
    /// The path came from `RTHOST_SERVICING_ROOT` / `.env`.
    EnvVar,
    /// Platform default servicing location.
    Default,
}

/// Resolution result for the servicing root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicingRootResolution {
    /// The servicing root; empty when an explicit blank value was supplied.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: ServicingRootSource,
}

impl ServicingRootResolution {
    /// Location mode the resolver should apply to this root.
    pub const fn location(&self) -> ServicingLocation {
        match self.source {
            ServicingRootSource::Default => ServicingLocation::Default,
            ServicingRootSource::Explicit | ServicingRootSource::EnvVar => {
                ServicingLocation::Explicit
            }
        }
    }
}

/// Resolve the servicing root from an explicit override, env var, or default.
///
/// Resolution order:
/// 1. Explicit path provided by caller (kept even when blank)
/// 2. `RTHOST_SERVICING_ROOT` environment variable, when not blank
/// 3. Platform default servicing location
pub fn resolve_servicing_root(explicit: Option<&str>) -> Result<ServicingRootResolution, PathError> {
    if let Some(path_str) = explicit {
        return Ok(ServicingRootResolution {
            path: normalize_user_path(path_str)?,
            source: ServicingRootSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(SERVICING_ROOT_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(ServicingRootResolution {
                path: normalize_user_path(&env_path)?,
                source: ServicingRootSource::EnvVar,
            });
        }
    }

    Ok(ServicingRootResolution {
        path: default_servicing_root()?,
        source: ServicingRootSource::Default,
    })
}
