//! Storefront cart CLI

use std::process::ExitCode;

mod commands;
mod config;
mod observability;

use crate::config::CartConfig;

/// Cart CLI entry point
pub fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = CartConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        return ExitCode::FAILURE;
    }

    match commands::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            #[expect(
                clippy::print_stderr,
                reason = "user-facing command errors go to stderr"
            )]
            {
                eprintln!("{message}");
            }

            ExitCode::FAILURE
        }
    }
}
