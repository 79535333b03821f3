//! Subcommands and their shared arguments.

use clap::{Args, Subcommand};

/// Arguments describing the runtime being bootstrapped.
///
/// The servicing root and runtime directory are deliberately not bound to
/// environment variables here: path discovery reads them itself so it can
/// tell an explicit flag apart from environment configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct RuntimeArgs {
    /// Explicit servicing root (overrides RTHOST_SERVICING_ROOT)
    #[arg(long = "servicing-root")]
    pub servicing_root: Option<String>,

    /// Original runtime directory (overrides RTHOST_RUNTIME_DIR)
    #[arg(long = "runtime-dir")]
    pub runtime_dir: Option<String>,

    /// Runtime flavor name, e.g. rthost-linux-x64
    #[arg(long = "runtime-name", env = "RTHOST_RUNTIME_NAME")]
    pub runtime_name: Option<String>,

    /// Runtime version
    #[arg(long = "runtime-version", env = "RTHOST_RUNTIME_VERSION")]
    pub runtime_version: Option<String>,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the effective runtime directory and print it
    Resolve {
        #[command(flatten)]
        runtime: RuntimeArgs,

        /// Print a JSON report including trace lines
        #[arg(long)]
        json: bool,
    },

    /// Show the discovered servicing root and runtime configuration
    Paths {
        #[command(flatten)]
        runtime: RuntimeArgs,
    },
}
