//! Cart CLI configuration

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::commands::Command;

/// Storefront cart command-line interface
#[derive(Debug, Parser)]
#[command(name = "cart", about = "Storefront cart ledger", long_about = None)]
pub(crate) struct CartConfig {
    /// Cart storage settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Cart operation to run.
    #[command(subcommand)]
    pub command: Command,
}

impl CartConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Cart storage settings.
#[derive(Debug, Args)]
pub(crate) struct StoreConfig {
    /// Path of the YAML file holding the cart
    #[arg(long = "store", env = "CART_STORE", default_value = "cart.yaml")]
    pub path: PathBuf,

    /// ISO currency code used to display amounts (GBP, USD, EUR)
    #[arg(long, env = "CART_CURRENCY", default_value = "GBP")]
    pub currency: String,
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
