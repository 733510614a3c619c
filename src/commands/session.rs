//! Session CLI commands.

use clap::{Args, Subcommand};

use super::Console;
use crate::output;
use dataall_core::config::AppConfig;
use dataall_core::error::AppError;

/// Arguments for session commands
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Session subcommand
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session subcommands
#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Sign in as the configured user, replaying any pending request
    Login,
    /// Sign out and forget the current route
    Logout,
    /// Show the configured session
    Status,
}

/// Execute session commands
pub async fn execute(
    args: &SessionArgs,
    config: AppConfig,
) -> Result<(), AppError> {
    match &args.command {
        SessionCommand::Login => {
            let (console, _) = Console::sign_in(config).await?;
            output::print_kv("Platform", &console.ctx.session.platform().to_string());
        }
        SessionCommand::Logout => {
            let (mut console, _) = Console::sign_in(config).await?;
            console.ctx.session.logout().await?;
            console.flush();
        }
        SessionCommand::Status => {
            let console = Console::connect(config).await?;
            let ctx = &console.ctx;
            let pending = ctx.replay.restore_retry_request().await;

            let user = match (&ctx.config.auth.username, &ctx.config.auth.id_token) {
                (Some(username), _) => username.as_str(),
                (None, Some(_)) => "(from id token)",
                (None, None) => "-",
            };

            output::print_kv("Endpoint", &ctx.config.api.endpoint);
            output::print_kv("Platform", &ctx.session.platform().to_string());
            output::print_kv("User", user);
            output::print_kv("Durable store", &ctx.config.storage.provider);
            output::print_kv("Replay window", &format!("{} min", ctx.replay.ttl_minutes()));
            output::print_kv(
                "Pending replay",
                pending.as_ref().map(|i| i.operation_name()).unwrap_or("-"),
            );
        }
    }

    Ok(())
}
