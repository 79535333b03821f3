//! Concrete [`TraceWriter`] implementations.
//!
//! - [`TracingTraceWriter`] forwards lines to the `tracing` subscriber
//! - [`BufferedTraceWriter`] keeps lines in memory for reports and tests
//! - [`TeeTraceWriter`] fans a line out to two writers

use std::sync::Mutex;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::ports::{TraceLevel, TraceWriter};

/// Forwards trace lines to `tracing` under the `rthost::servicing` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTraceWriter;

impl TraceWriter for TracingTraceWriter {
    fn write(&self, level: TraceLevel, message: &str) {
        match level {
            TraceLevel::Info => info!(target: "rthost::servicing", "{message}"),
            TraceLevel::Warning => warn!(target: "rthost::servicing", "{message}"),
            TraceLevel::Error => error!(target: "rthost::servicing", "{message}"),
        }
    }
}

/// A single captured trace line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceLine {
    pub level: TraceLevel,
    pub message: String,
}

/// Collects trace lines in memory.
#[derive(Debug, Default)]
pub struct BufferedTraceWriter {
    lines: Mutex<Vec<TraceLine>>,
}

impl BufferedTraceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<TraceLine> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Take the captured lines, leaving the buffer empty.
    pub fn drain(&self) -> Vec<TraceLine> {
        self.lines
            .lock()
            .map(|mut lines| std::mem::take(&mut *lines))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TraceWriter for BufferedTraceWriter {
    fn write(&self, level: TraceLevel, message: &str) {
        // A poisoned buffer only loses diagnostics, never the resolution result.
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(TraceLine {
                level,
                message: message.to_string(),
            });
        }
    }
}

/// Writes every line to both wrapped writers, in order.
pub struct TeeTraceWriter<'a> {
    first: &'a dyn TraceWriter,
    second: &'a dyn TraceWriter,
}

impl<'a> TeeTraceWriter<'a> {
    pub fn new(first: &'a dyn TraceWriter, second: &'a dyn TraceWriter) -> Self {
        Self { first, second }
    }
}

impl TraceWriter for TeeTraceWriter<'_> {
    fn write(&self, level: TraceLevel, message: &str) {
        self.first.write(level, message);
        self.second.write(level, message);
    }
}
