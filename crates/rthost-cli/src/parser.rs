//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the runtime host.
#[derive(Parser)]
#[command(name = "rthost")]
#[command(about = "Resolve which directory the managed runtime is loaded from")]
#[command(version)]
pub struct Cli {
    /// Show servicing trace lines on stderr
    #[arg(long = "trace", global = true, env = "RTHOST_TRACE")]
    pub trace: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_trace_flag() {
        let cli = Cli::parse_from(["rthost", "resolve", "--trace"]);
        assert!(cli.trace);
        assert!(matches!(cli.command, Some(Commands::Resolve { .. })));
    }

    #[test]
    fn test_resolve_args() {
        let cli = Cli::parse_from([
            "rthost",
            "resolve",
            "--servicing-root",
            "/opt/svc",
            "--runtime-dir",
            "/usr/lib/rthost",
            "--runtime-name",
            "rthost-linux-x64",
            "--runtime-version",
            "1.2.0",
            "--json",
        ]);
        let Some(Commands::Resolve { runtime, json }) = cli.command else {
            panic!("expected resolve command");
        };
        assert!(json);
        assert_eq!(runtime.servicing_root.as_deref(), Some("/opt/svc"));
        assert_eq!(runtime.runtime_dir.as_deref(), Some("/usr/lib/rthost"));
        assert_eq!(runtime.runtime_name.as_deref(), Some("rthost-linux-x64"));
        assert_eq!(runtime.runtime_version.as_deref(), Some("1.2.0"));
    }

    #[test]
    fn test_empty_servicing_root_is_accepted() {
        let cli = Cli::parse_from(["rthost", "paths", "--servicing-root", ""]);
        let Some(Commands::Paths { runtime }) = cli.command else {
            panic!("expected paths command");
        };
        assert_eq!(runtime.servicing_root.as_deref(), Some(""));
    }
}
