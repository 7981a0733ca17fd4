//! jsonprop command line entry point.
//!
//! Runs one read, write or delete against a JSON file and reports the read
//! value as a named output.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;
mod output;

use cli::Cli;

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only outputs
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jsonprop=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.to_config();

    let outcome = match jsonprop::action::run(&config) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(module = e.module(), "{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(value) = &outcome.output {
        if let Err(e) = output::emit(value, cli.github_output.as_deref()) {
            error!(name = %value.name, "Failed to emit output: {e}");
            return ExitCode::FAILURE;
        }
    }

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
