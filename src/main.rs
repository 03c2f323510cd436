//! Envex - load env files and exec a command with the merged environment.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envex::cli::output;
use envex::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("ENVEX_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envex=debug")
        } else {
            EnvFilter::new("envex=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    match execute(&cli) {
        Ok(never) => match never {},
        Err(e) => {
            output::error(&e.to_string());
            std::process::exit(1);
        }
    }
}
