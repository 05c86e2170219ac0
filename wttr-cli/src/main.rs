//! Binary crate for the `wttr-bar` status-bar module.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging to stderr, so stdout carries only the widget JSON
//! - Running the report pipeline once and printing its result

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cmd.log_filter()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cmd.run(&mut std::io::stdout()).await
}
