//! Port definitions consumed by the servicing resolver.
//!
//! Ports are the seams between the decision logic and the outside world:
//! - [`FileSystemProbe`]: existence checks and small text reads
//! - [`TraceWriter`]: the diagnostic sink the resolver reports decisions to
//!
//! Concrete implementations for production live next to the traits
//! ([`StdFileSystem`], [`NoopTraceWriter`]) or in [`crate::trace`].

mod filesystem;
mod trace_writer;

pub use filesystem::{FileSystemProbe, StdFileSystem};
pub use trace_writer::{NoopTraceWriter, TraceLevel, TraceWriter};
