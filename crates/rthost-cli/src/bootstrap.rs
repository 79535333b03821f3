//! CLI bootstrap - the composition root.
//!
//! Turns flags and environment into a [`CliConfig`]: the servicing root with
//! its location mode, the original runtime directory and the runtime identity.

use rthost_core::{
    BootstrapContext, RuntimeDirResolution, RuntimeIdentity, ServicingLocation,
    ServicingRootResolution, resolve_original_runtime_dir, resolve_servicing_root,
};
use tracing::debug;

use crate::commands::RuntimeArgs;
use crate::error::CliError;

/// Bootstrap configuration for one resolution.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub servicing_root: ServicingRootResolution,
    pub runtime_dir: RuntimeDirResolution,
    pub runtime: RuntimeIdentity,
}

impl CliConfig {
    /// Resolve configuration with flag > env > default precedence.
    pub fn from_args(args: &RuntimeArgs) -> Result<Self, CliError> {
        let servicing_root = resolve_servicing_root(args.servicing_root.as_deref())?;
        let runtime_dir = resolve_original_runtime_dir(args.runtime_dir.as_deref())?;
        let runtime = runtime_identity(args)?;

        debug!(
            servicing_root = %servicing_root.path.display(),
            source = ?servicing_root.source,
            runtime_dir = %runtime_dir.path.display(),
            %runtime,
            "Bootstrap configuration resolved"
        );

        Ok(Self {
            servicing_root,
            runtime_dir,
            runtime,
        })
    }

    pub const fn location(&self) -> ServicingLocation {
        self.servicing_root.location()
    }

    /// Context handed to the servicing resolver.
    pub fn context(&self) -> BootstrapContext {
        BootstrapContext::new(self.runtime_dir.path.clone(), self.runtime.clone())
    }
}

fn runtime_identity(args: &RuntimeArgs) -> Result<RuntimeIdentity, CliError> {
    let current = RuntimeIdentity::current();
    let name = non_blank(args.runtime_name.as_deref(), "--runtime-name")?
        .unwrap_or(current.name);
    let version = non_blank(args.runtime_version.as_deref(), "--runtime-version")?
        .unwrap_or(current.version);
    Ok(RuntimeIdentity::new(name, version))
}

fn non_blank(value: Option<&str>, flag: &str) -> Result<Option<String>, CliError> {
    match value.map(str::trim) {
        None => Ok(None),
        Some("") => Err(CliError::Arguments(format!("{flag} cannot be empty"))),
        Some(v) if v.contains(['|', '=']) => Err(CliError::Arguments(format!(
            "{flag} cannot contain '|' or '='"
        ))),
        Some(v) => Ok(Some(v.to_string())),
    }
}
