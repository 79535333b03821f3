//! CLI entry point - the composition root.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use rthost_cli::error::exit_code_for;
use rthost_cli::{Cli, CliConfig, Commands, handlers, logging};

fn main() -> ExitCode {
    // Load .env before parsing so clap's env fallbacks can see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.trace);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Resolve { runtime, json } => {
            let config = CliConfig::from_args(&runtime)?;
            handlers::resolve::execute(&config, json)?;
        }
        Commands::Paths { runtime } => {
            let config = CliConfig::from_args(&runtime)?;
            handlers::paths::execute(&config)?;
        }
    }

    Ok(())
}
