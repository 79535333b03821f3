//! Core of the rthost runtime host.
//!
//! Decides which directory the managed runtime is loaded from, honouring an
//! optional servicing override staged under a servicing root.
//!
//! - [`servicing`]: the resolver, the servicing index format and runtime layout
//! - [`ports`]: filesystem and trace-writer capabilities consumed by the resolver
//! - [`paths`]: discovery of the servicing root and the original runtime directory
//! - [`trace`]: concrete trace writers (tracing-backed, buffered, tee)

pub mod paths;
pub mod ports;
pub mod servicing;
pub mod trace;

// Re-export commonly used types for convenience
pub use ports::{FileSystemProbe, NoopTraceWriter, StdFileSystem, TraceLevel, TraceWriter};
pub use servicing::{
    BootstrapContext, IndexError, RuntimeIdentity, RuntimeLayout, SERVICING_INDEX_FILE,
    ServicingError, ServicingIndex, ServicingLocation, ServicingResolver, ServicingResult,
    resolve_runtime_path,
};
pub use trace::{BufferedTraceWriter, TeeTraceWriter, TraceLine, TracingTraceWriter};

// Re-export path utilities
pub use paths::{
    DEFAULT_SERVICING_DIR_NAME, PathError, RUNTIME_DIR_ENV, RuntimeDirResolution,
    RuntimeDirSource, SERVICING_ROOT_ENV, ServicingRootResolution, ServicingRootSource,
    default_servicing_root, resolve_original_runtime_dir, resolve_servicing_root,
};
