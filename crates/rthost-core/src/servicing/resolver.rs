//! The servicing decision procedure.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{ServicingError, ServicingResult};
use super::index::{IndexEntry, SERVICING_INDEX_FILE, ServicingIndex};
use super::location::ServicingLocation;
use super::runtime::{BootstrapContext, VERSION_DESCRIPTOR_FILE};
use crate::ports::{FileSystemProbe, StdFileSystem, TraceLevel, TraceWriter};

/// Resolves the effective runtime directory for one bootstrap context.
///
/// Stateless between calls: resolving twice against an unchanged filesystem
/// yields the same result and the same trace lines.
#[derive(Debug, Clone)]
pub struct ServicingResolver<F = StdFileSystem> {
    context: BootstrapContext,
    fs: F,
}

impl ServicingResolver<StdFileSystem> {
    /// Resolver probing the real filesystem.
    pub const fn new(context: BootstrapContext) -> Self {
        Self {
            context,
            fs: StdFileSystem,
        }
    }
}

impl<F: FileSystemProbe> ServicingResolver<F> {
    pub const fn with_filesystem(context: BootstrapContext, fs: F) -> Self {
        Self { context, fs }
    }

    pub const fn context(&self) -> &BootstrapContext {
        &self.context
    }

    /// Decide which directory the runtime is loaded from.
    ///
    /// Every branch writes at least one line to `trace`. Errors are never
    /// downgraded to the original runtime path.
    pub fn resolve(
        &self,
        servicing_root: &Path,
        location: ServicingLocation,
        trace: &dyn TraceWriter,
    ) -> ServicingResult<PathBuf> {
        debug!(
            servicing_root = %servicing_root.display(),
            %location,
            runtime = %self.context.runtime,
            "Resolving runtime path"
        );

        if servicing_root.as_os_str().is_empty() || !self.fs.is_dir(servicing_root) {
            return self.no_servicing_root(servicing_root, location, trace);
        }

        let index = self.load_index(servicing_root, trace)?;

        let Some(entry) = index.runtime_entry(&self.context.runtime) else {
            // The root services other runtimes only; worth flagging, not failing.
            return self.fall_back(
                trace,
                TraceLevel::Warning,
                &format!(
                    "Servicing index '{}' has no entry for runtime '{}'",
                    servicing_root.join(SERVICING_INDEX_FILE).display(),
                    self.context.runtime
                ),
            );
        };

        let runtime_dir = self.validate_entry(servicing_root, entry, trace)?;

        trace.write(
            TraceLevel::Info,
            &format!(
                "Using servicing override for runtime '{}' from '{}'",
                self.context.runtime,
                runtime_dir.display()
            ),
        );
        Ok(runtime_dir)
    }

    fn no_servicing_root(
        &self,
        servicing_root: &Path,
        location: ServicingLocation,
        trace: &dyn TraceWriter,
    ) -> ServicingResult<PathBuf> {
        let reason = if servicing_root.as_os_str().is_empty() {
            "servicing root is empty".to_string()
        } else {
            "servicing root does not exist or is not a directory".to_string()
        };

        match location {
            ServicingLocation::Default => self.fall_back(
                trace,
                TraceLevel::Info,
                &format!(
                    "No servicing override at default location '{}' ({reason})",
                    servicing_root.display()
                ),
            ),
            ServicingLocation::Explicit => {
                trace.write(
                    TraceLevel::Error,
                    &format!(
                        "Explicit servicing root '{}' is unusable: {reason}",
                        servicing_root.display()
                    ),
                );
                Err(ServicingError::configuration(servicing_root, reason))
            }
        }
    }

    /// Return the original runtime directory, which must itself exist.
    fn fall_back(
        &self,
        trace: &dyn TraceWriter,
        level: TraceLevel,
        why: &str,
    ) -> ServicingResult<PathBuf> {
        let original = &self.context.original_runtime_path;

        if original.as_os_str().is_empty() || !self.fs.is_dir(original) {
            trace.write(
                TraceLevel::Error,
                &format!(
                    "{why}; original runtime path '{}' does not exist",
                    original.display()
                ),
            );
            return Err(ServicingError::configuration(
                original.clone(),
                "original runtime path does not exist or is not a directory",
            ));
        }

        trace.write(
            level,
            &format!("{why}; using original runtime path '{}'", original.display()),
        );
        Ok(original.clone())
    }

    fn load_index(
        &self,
        servicing_root: &Path,
        trace: &dyn TraceWriter,
    ) -> ServicingResult<ServicingIndex> {
        let index_path = servicing_root.join(SERVICING_INDEX_FILE);

        if !self.fs.is_file(&index_path) {
            return Err(fail(
                trace,
                ServicingError::validation(
                    servicing_root,
                    SERVICING_INDEX_FILE,
                    "servicing index not found",
                ),
            ));
        }

        let contents = self.fs.read_to_string(&index_path).map_err(|e| {
            fail(
                trace,
                ServicingError::validation(
                    servicing_root,
                    SERVICING_INDEX_FILE,
                    format!("servicing index could not be read: {e}"),
                ),
            )
        })?;

        ServicingIndex::parse(&contents).map_err(|e| {
            fail(
                trace,
                ServicingError::validation(
                    servicing_root,
                    format!("{SERVICING_INDEX_FILE} line {}", e.line()),
                    e.to_string(),
                ),
            )
        })
    }

    /// Check that the serviced directory holds a complete runtime.
    fn validate_entry(
        &self,
        servicing_root: &Path,
        entry: &IndexEntry,
        trace: &dyn TraceWriter,
    ) -> ServicingResult<PathBuf> {
        let relative = entry.relative_path().ok_or_else(|| {
            fail(
                trace,
                ServicingError::validation(
                    servicing_root,
                    entry.key.clone(),
                    "runtime entry has no usable relative path",
                ),
            )
        })?;
        let runtime_dir = servicing_root.join(relative);

        if !self.fs.is_dir(&runtime_dir) {
            return Err(fail(
                trace,
                ServicingError::validation(
                    &runtime_dir,
                    entry.key.clone(),
                    "serviced runtime directory does not exist",
                ),
            ));
        }

        for file in self.context.layout.required_files() {
            if !self.fs.is_file(&runtime_dir.join(file)) {
                return Err(fail(
                    trace,
                    ServicingError::validation(
                        &runtime_dir,
                        file.display().to_string(),
                        "required runtime file is missing",
                    ),
                ));
            }
        }

        if self.context.layout.requires_version_descriptor() {
            self.check_version_descriptor(&runtime_dir, trace)?;
        }

        Ok(runtime_dir)
    }

    fn check_version_descriptor(
        &self,
        runtime_dir: &Path,
        trace: &dyn TraceWriter,
    ) -> ServicingResult<()> {
        let expected = self.context.runtime.full_name();
        let contents = self
            .fs
            .read_to_string(&runtime_dir.join(VERSION_DESCRIPTOR_FILE))
            .map_err(|e| {
                fail(
                    trace,
                    ServicingError::validation(
                        runtime_dir,
                        VERSION_DESCRIPTOR_FILE,
                        format!("version descriptor could not be read: {e}"),
                    ),
                )
            })?;

        let found = contents.trim().trim_start_matches('\u{feff}');
        if !found.eq_ignore_ascii_case(&expected) {
            return Err(fail(
                trace,
                ServicingError::validation(
                    runtime_dir,
                    VERSION_DESCRIPTOR_FILE,
                    format!("expected runtime '{expected}', found '{found}'"),
                ),
            ));
        }
        Ok(())
    }
}

/// Trace the cause, then hand the error back for propagation.
fn fail(trace: &dyn TraceWriter, err: ServicingError) -> ServicingError {
    trace.write(TraceLevel::Error, &err.to_string());
    err
}

/// Resolve against the real filesystem using the boolean mode flag of the
/// bootstrap call boundary.
pub fn resolve_runtime_path(
    context: &BootstrapContext,
    servicing_root: &Path,
    is_default_location: bool,
    trace: &dyn TraceWriter,
) -> ServicingResult<PathBuf> {
    ServicingResolver::new(context.clone()).resolve(
        servicing_root,
        ServicingLocation::from_default_flag(is_default_location),
        trace,
    )
}
