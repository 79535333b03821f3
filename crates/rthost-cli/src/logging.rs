//! Logging setup for the CLI.
//!
//! Logs go to stderr so stdout carries only the resolved path or report.

use tracing_subscriber::EnvFilter;

/// Target the core's trace writer logs under.
pub const SERVICING_TARGET: &str = "rthost::servicing";

/// Build filter directives from `RUST_LOG` and the `--trace` flag.
///
/// `--trace` only adds the servicing target at `info`; anything else in
/// `RUST_LOG` is kept as-is.
pub fn filter_directives(trace: bool, rust_log: Option<&str>) -> String {
    let base = rust_log
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or("warn");

    if trace {
        format!("{base},{SERVICING_TARGET}=info")
    } else {
        base.to_string()
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(trace: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directives = filter_directives(trace, rust_log.as_deref());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
