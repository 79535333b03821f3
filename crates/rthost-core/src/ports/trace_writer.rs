//! Trace writer port for decision diagnostics.
//!
//! This port abstracts the destination of trace lines (console, log file,
//! structured logging) so the resolver only ever sees "accepts a message".

use serde::Serialize;

/// Severity attached to a trace line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    /// Expected decision (no override, override in use)
    Info,
    /// Suspicious but non-fatal condition
    Warning,
    /// Cause of a failed resolution
    Error,
}

impl std::fmt::Display for TraceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}

/// Port for writing human-readable diagnostic lines.
///
/// Writers are borrowed for the duration of a call and never retained.
/// Failures inside the sink are the sink's concern; `write` cannot fail.
pub trait TraceWriter: Send + Sync {
    /// Append one trace line.
    fn write(&self, level: TraceLevel, message: &str);
}

/// Trace writer that discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTraceWriter;

impl TraceWriter for NoopTraceWriter {
    fn write(&self, _level: TraceLevel, _message: &str) {}
}
