//! Runtime identity, required layout and the bootstrap context.

use std::path::{Path, PathBuf};

/// File in a serviced runtime directory that names the runtime it contains.
pub const VERSION_DESCRIPTOR_FILE: &str = "runtime.version";

#[cfg(target_os = "windows")]
const HOST_BINARY: &str = "rthost.exe";

#[cfg(not(target_os = "windows"))]
const HOST_BINARY: &str = "rthost";

/// Name and version of the runtime being bootstrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeIdentity {
    /// Flavor name, e.g. `rthost-linux-x64`
    pub name: String,
    pub version: String,
}

impl RuntimeIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Identity of the runtime this host was built as.
    pub fn current() -> Self {
        let arch = match std::env::consts::ARCH {
            "x86_64" => "x64",
            "x86" => "x86",
            "aarch64" => "arm64",
            other => other,
        };
        let os = match std::env::consts::OS {
            "windows" => "win",
            "macos" => "darwin",
            other => other,
        };
        Self::new(format!("rthost-{os}-{arch}"), env!("CARGO_PKG_VERSION"))
    }

    /// `name.version`, the key used in the servicing index.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.name, self.version)
    }
}

impl std::fmt::Display for RuntimeIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.name, self.version)
    }
}

/// Files that must be present in a serviced runtime directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeLayout {
    required_files: Vec<PathBuf>,
}

impl RuntimeLayout {
    /// Layout with an explicit set of required files (relative paths).
    pub fn with_required_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            required_files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn required_files(&self) -> &[PathBuf] {
        &self.required_files
    }

    /// Whether the version descriptor must be present and checked.
    pub fn requires_version_descriptor(&self) -> bool {
        self.required_files
            .iter()
            .any(|file| file == Path::new(VERSION_DESCRIPTOR_FILE))
    }
}

impl Default for RuntimeLayout {
    /// `bin/<host binary>` plus the version descriptor.
    fn default() -> Self {
        Self::with_required_files([
            Path::new("bin").join(HOST_BINARY),
            PathBuf::from(VERSION_DESCRIPTOR_FILE),
        ])
    }
}

/// Everything the resolver needs from the surrounding bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapContext {
    /// Runtime directory to use when nothing is serviced.
    pub original_runtime_path: PathBuf,
    pub runtime: RuntimeIdentity,
    pub layout: RuntimeLayout,
}

impl BootstrapContext {
    /// Context with the default runtime layout.
    pub fn new(original_runtime_path: impl Into<PathBuf>, runtime: RuntimeIdentity) -> Self {
        Self {
            original_runtime_path: original_runtime_path.into(),
            runtime,
            layout: RuntimeLayout::default(),
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: RuntimeLayout) -> Self {
        self.layout = layout;
        self
    }
}
