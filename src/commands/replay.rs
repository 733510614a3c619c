//! Re-authentication replay CLI commands.

use chrono::Utc;
use clap::{Args, Subcommand};

use super::Console;
use crate::output::{self, OutputFormat};
use dataall_core::config::AppConfig;
use dataall_core::error::AppError;
use dataall_service::ReplayOutcome;

/// Arguments for replay commands
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Replay subcommand
    #[command(subcommand)]
    pub command: ReplayCommand,
}

/// Replay subcommands
#[derive(Debug, Subcommand)]
pub enum ReplayCommand {
    /// Show the request captured when the session last expired
    Status,
    /// Sign in and replay the pending request
    Run,
    /// Drop the pending request without replaying it
    Clear,
}

/// Execute replay commands
pub async fn execute(
    args: &ReplayArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ReplayCommand::Status => {
            let console = Console::connect(config).await?;
            let replay = &console.ctx.replay;

            let Some(info) = replay.restore_retry_request().await else {
                if replay.slot().is_occupied().await {
                    output::print_warning("The pending request is unreadable and will be discarded");
                } else {
                    println!("No pending request.");
                }
                return Ok(());
            };

            if format == OutputFormat::Json {
                output::print_item(&info, format);
                return Ok(());
            }

            let now = Utc::now();
            let kind = info
                .request_info
                .kind()
                .map(|k| k.to_string())
                .unwrap_or_else(|_| "unknown".to_string());

            output::print_kv("Operation", info.operation_name());
            output::print_kv("Kind", &kind);
            output::print_kv("User", &info.username);
            output::print_kv("Route", &info.pathname);
            output::print_kv("Captured", &info.timestamp.to_rfc3339());
            output::print_kv(
                "Age",
                &format!("{} min", (now - info.timestamp).num_minutes()),
            );
            output::print_kv(
                "Replayable",
                if info.is_fresh(now, replay.ttl()) { "yes" } else { "no, expired" },
            );
        }
        ReplayCommand::Run => {
            let (_, outcome) = Console::sign_in(config).await?;
            if matches!(outcome, ReplayOutcome::Idle) {
                println!("No pending request.");
            }
        }
        ReplayCommand::Clear => {
            let console = Console::connect(config).await?;
            console.ctx.replay.slot().clear_request_info().await?;
            output::print_success("Pending request cleared");
        }
    }

    Ok(())
}
