//! Binary crate for the `weathernow` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive search shell
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod render;
mod shell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Frames go to stdout; keep diagnostics on stderr and quiet unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
