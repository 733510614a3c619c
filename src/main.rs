//! data.all console
//!
//! Command-line front end over the share lifecycle controller and the
//! re-authentication replay manager.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use dataall_core::config::AppConfig;
use dataall_core::error::AppError;

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = cli.execute(config).await {
        tracing::debug!(kind = %e.kind, "Command failed");
        output::print_error(&e.message);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration(cli_path: &str) -> Result<AppConfig, AppError> {
    let config_path = std::env::var("DATAALL_CONFIG").unwrap_or_else(|_| cli_path.to_string());
    let env = std::env::var("DATAALL_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_path, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
