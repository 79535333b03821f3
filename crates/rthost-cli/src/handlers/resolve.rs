//! Resolve command handler.
//!
//! Runs the servicing resolver once and prints the effective runtime
//! directory, or a JSON report with the decision and its trace lines.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rthost_core::{
    BufferedTraceWriter, ServicingLocation, ServicingResolver, TeeTraceWriter, TraceLine,
    TracingTraceWriter,
};
use serde::Serialize;

use crate::bootstrap::CliConfig;
use crate::error::CliError;

/// Machine-readable outcome of a resolution.
#[derive(Debug, Serialize)]
pub struct ResolveReport {
    pub runtime: String,
    pub servicing_root: PathBuf,
    pub location: ServicingLocation,
    pub original_runtime_path: PathBuf,
    /// Effective runtime directory, absent on failure.
    pub runtime_path: Option<PathBuf>,
    /// Whether the effective directory came from the servicing root.
    pub serviced: bool,
    pub error: Option<String>,
    pub trace: Vec<TraceLine>,
}

/// Resolve and report. Returns the resolution error (as [`CliError`]) after
/// printing so `main` can pick the exit code.
pub fn execute(config: &CliConfig, json: bool) -> Result<()> {
    let (report, outcome) = run(config);

    if json {
        let rendered =
            serde_json::to_string_pretty(&report).context("Failed to serialize resolve report")?;
        println!("{rendered}");
    } else if let Some(path) = &report.runtime_path {
        println!("{}", path.display());
    }

    outcome.map_err(anyhow::Error::from)
}

/// Resolve without printing.
pub fn run(config: &CliConfig) -> (ResolveReport, Result<(), CliError>) {
    let resolver = ServicingResolver::new(config.context());
    let buffer = BufferedTraceWriter::new();
    let logger = TracingTraceWriter;
    let trace = TeeTraceWriter::new(&buffer, &logger);

    let result = resolver.resolve(&config.servicing_root.path, config.location(), &trace);

    let original = config.runtime_dir.path.clone();
    let (runtime_path, error, outcome) = match result {
        Ok(path) => (Some(path), None, Ok(())),
        Err(err) => (None, Some(err.to_string()), Err(CliError::from(err))),
    };
    let serviced = runtime_path
        .as_ref()
        .is_some_and(|path| *path != original);

    let report = ResolveReport {
        runtime: config.runtime.full_name(),
        servicing_root: config.servicing_root.path.clone(),
        location: config.location(),
        original_runtime_path: original,
        runtime_path,
        serviced,
        error,
        trace: buffer.drain(),
    };

    (report, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::RuntimeArgs;
    use std::fs;
    use tempfile::tempdir;

    fn config(root: &str, runtime_dir: &str) -> CliConfig {
        CliConfig::from_args(&RuntimeArgs {
            servicing_root: Some(root.to_string()),
            runtime_dir: Some(runtime_dir.to_string()),
            runtime_name: Some("rthost-test".to_string()),
            runtime_version: Some("0.1.0".to_string()),
        })
        .unwrap()
    }

    #[test]
    fn missing_explicit_root_reports_configuration_error() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("svc");
        let cfg = config(&root.display().to_string(), &dir.path().display().to_string());

        let (report, outcome) = run(&cfg);

        assert_eq!(outcome.unwrap_err().exit_code(), 78);
        assert!(report.runtime_path.is_none());
        assert!(report.error.is_some());
        assert_eq!(report.trace.len(), 1);
    }

    #[test]
    fn serviced_runtime_is_flagged() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("svc");
        let serviced = root.join("rt");
        fs::create_dir_all(serviced.join("bin")).unwrap();
        let host = if cfg!(target_os = "windows") {
            "rthost.exe"
        } else {
            "rthost"
        };
        fs::write(serviced.join("bin").join(host), b"").unwrap();
        fs::write(serviced.join("runtime.version"), "rthost-test.0.1.0").unwrap();
        fs::write(root.join("servicing.inf"), "runtime|rthost-test.0.1.0=rt\n").unwrap();
        let cfg = config(&root.display().to_string(), &dir.path().display().to_string());

        let (report, outcome) = run(&cfg);

        assert!(outcome.is_ok());
        assert!(report.serviced);
        assert_eq!(report.runtime_path, Some(serviced));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["location"], "explicit");
        assert_eq!(json["trace"][0]["level"], "info");
    }
}
