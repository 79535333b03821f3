#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

//! `rthost` command-line host.
//!
//! Wires the core servicing resolver to real adapters: environment and flag
//! configuration, a `tracing`-backed trace writer and process exit codes.

// Used by main.rs only
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::CliConfig;
pub use commands::{Commands, RuntimeArgs};
pub use error::CliError;
pub use parser::Cli;
