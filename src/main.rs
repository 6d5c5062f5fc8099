//! statuspage - command-line client for the Statuspage REST API
//!
//! Maps `<verb> <resource>` subcommands onto single authenticated requests and
//! prints the raw response body.

mod api;
mod cli;
mod config;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse CLI arguments; usage errors exit with 1, help and version with 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize logging on stderr so stdout only carries response bodies
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // Execute command
    match cli::execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
