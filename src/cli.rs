//! CLI Argument Parsing
//!
//! `mudsync [OPTIONS] [TASK]`. Global flags apply to every task.

use std::path::PathBuf;

use clap::Parser;

use mudsync::config::DEFAULT_MANIFEST;

/// mudsync - build, deploy and import hackmud scripts for many users
#[derive(Parser, Debug)]
#[command(name = "mudsync")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'mudsync --list' to see every task.")]
pub struct Cli {
    /// Task to run
    #[arg(default_value = "default")]
    pub task: String,

    /// Project manifest
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub config: PathBuf,

    /// Output NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Use ASCII icons instead of unicode
    #[arg(long)]
    pub ascii: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// List tasks and exit
    #[arg(long)]
    pub list: bool,
}
