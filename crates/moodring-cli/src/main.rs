#![forbid(unsafe_code)]

//! `moodring`: render journal entries, mood fields, and profiles in mood colors.

mod cli;
mod output;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_directive());
    tracing::debug!(?cli, "parsed arguments");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::run(&cli, &mut out)
}

/// Log to stderr so stdout stays clean for rendered output.
fn init_logging(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
