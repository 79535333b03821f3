//! Servicing override resolution.
//!
//! A servicing root is a directory where patched runtime binaries can be
//! staged without touching the original installation. This module decides,
//! once per bootstrap, which directory the runtime is loaded from:
//! - No usable root: the original runtime directory (default mode) or a
//!   configuration error (explicit mode)
//! - A root with a valid entry for this runtime: the serviced directory
//! - A root with a broken or half-staged payload: a validation error
//!
//! # Public API
//!
//! ```rust,ignore
//! use rthost_core::servicing::{BootstrapContext, ServicingLocation, ServicingResolver};
//!
//! let resolver = ServicingResolver::new(context);
//! let runtime_dir = resolver.resolve(&root, ServicingLocation::Default, &trace)?;
//! ```

mod error;
mod index;
mod location;
mod resolver;
mod runtime;

pub use error::{ServicingError, ServicingResult};
pub use index::{IndexEntry, IndexError, RUNTIME_KEY_PREFIX, SERVICING_INDEX_FILE, ServicingIndex};
pub use location::ServicingLocation;
pub use resolver::{ServicingResolver, resolve_runtime_path};
pub use runtime::{BootstrapContext, RuntimeIdentity, RuntimeLayout, VERSION_DESCRIPTOR_FILE};
