//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use dataall_core::config::AppConfig;
use dataall_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    mut config: AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            config.api.token = config.api.token.as_ref().map(|_| "****".to_string());
            config.auth.id_token = config.auth.id_token.as_ref().map(|_| "****".to_string());
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => {
            if config.reauth.ttl_minutes <= 0 {
                let err = AppError::configuration("reauth.ttl_minutes must be positive");
                output::print_error(&format!("Configuration invalid: {}", err.message));
                return Err(err);
            }
            if !matches!(config.storage.provider.as_str(), "file" | "memory") {
                let err = AppError::configuration(format!(
                    "Unknown storage provider '{}'",
                    config.storage.provider
                ));
                output::print_error(&format!("Configuration invalid: {}", err.message));
                return Err(err);
            }

            output::print_success(&format!("Configuration '{config_path}' is valid"));
            output::print_kv("Endpoint", &config.api.endpoint);
            output::print_kv("Platform", &config.auth.platform().to_string());
            output::print_kv("Storage", &config.storage.provider);
            output::print_kv("Replay window", &format!("{} min", config.reauth.ttl_minutes));
        }
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(out_path, default_config).await?;

            output::print_success(&format!("Default config written to '{out_path}'"));
        }
    }

    Ok(())
}
