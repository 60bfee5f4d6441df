use std::io::{self, ErrorKind, Write};

use anyhow::{Context, Result};
use clap::Parser;
use panlaw_dsp::table;
use tracing_subscriber::EnvFilter;

/// Prints the tracker pan-law table as `(left, right), // position` literals.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
        .ok();

    let _cli = Cli::parse();

    let stdout = io::stdout();
    match emit(stdout.lock()) {
        Ok(lines) => {
            tracing::debug!(lines, "pan table written");
            Ok(())
        }
        Err(err) if err.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed early");
            Ok(())
        }
        Err(err) => Err(err).context("failed to write pan table to stdout"),
    }
}

fn emit<W: Write>(out: W) -> io::Result<usize> {
    table::write_table(io::BufWriter::new(out))
}
