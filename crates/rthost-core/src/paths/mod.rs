//! Path discovery for the runtime host.
//!
//! This module resolves the two directories the bootstrap needs before the
//! servicing decision can be made:
//! - The servicing root (explicit flag, environment, or platform default)
//! - The original runtime directory (explicit flag, environment, or executable dir)
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Only discovers paths; existence checks belong to the servicing resolver
//! - OS-specific logic is kept private in `platform`

mod error;
mod platform;
mod runtime_dir;
mod servicing_root;

#[cfg(test)]
mod test_utils;

pub use error::PathError;

pub use platform::{DEFAULT_SERVICING_DIR_NAME, default_servicing_root};

pub use runtime_dir::{
    RUNTIME_DIR_ENV, RuntimeDirResolution, RuntimeDirSource, resolve_original_runtime_dir,
};

pub use servicing_root::{
    SERVICING_ROOT_ENV, ServicingRootResolution, ServicingRootSource, resolve_servicing_root,
};
