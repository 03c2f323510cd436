//! Command-line interface.

pub mod output;

use std::convert::Infallible;
use std::path::PathBuf;

use clap::Parser;

use crate::core::exec;
use crate::error::Result;

/// Envex - load env files and exec a command with the merged environment.
#[derive(Parser)]
#[command(
    name = "envex",
    about = "Load env files and exec a command with the merged environment",
    version,
    after_help = "Files are merged in order; later files win over earlier \
                  files and over the inherited environment."
)]
pub struct Cli {
    /// Env files to load, in override order
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Command to run with the merged environment (after `--`)
    #[arg(last = true, required = true, value_name = "COMMAND")]
    pub command: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Merge the requested files and replace this process with the command.
///
/// Does not return on success; every return is an error.
pub fn execute(cli: &Cli) -> Result<Infallible> {
    // clap rejects an empty command vector before we get here
    let Some((command, args)) = cli.command.split_first() else {
        unreachable!("clap enforces a command after --");
    };

    exec::run(&cli.files, command, args)
}
