//! mudsync CLI - hackmud script build and distribution
//!
//! Usage: mudsync [OPTIONS] [TASK]
//!
//! Tasks:
//!   build     Build local and remote trees
//!   clean     Remove generated trees
//!   rebuild   Clean, then build
//!   watch     Rebuild on every source change
//!   import    Pull remote scripts back into identity sources

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Cli;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list {
        commands::cmd_list(cli.json)?;
        return Ok(ExitCode::SUCCESS);
    }

    let success = commands::cmd_run(&cli.task, &cli.config, cli.json, cli.ascii, cli.verbose)?;
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
