//! CLI command definitions and dispatch.

pub mod config;
pub mod replay;
pub mod session;
pub mod share;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::output::{self, OutputFormat};
use dataall_core::config::AppConfig;
use dataall_core::error::AppError;
use dataall_core::events::ConsoleEvent;
use dataall_core::traits::Notifier;
use dataall_entity::user::SessionUser;
use dataall_service::notify::channel::drain;
use dataall_service::{AppContext, ChannelNotifier, ReplayOutcome};

/// data.all console: share requests and session recovery
#[derive(Debug, Parser)]
#[command(name = "dataall-console", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Share request lifecycle
    Share(share::ShareArgs),
    /// Pending re-authentication replay
    Replay(replay::ReplayArgs),
    /// Session management
    Session(session::SessionArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Share(args) => share::execute(args, config, self.format).await,
            Commands::Replay(args) => replay::execute(args, config, self.format).await,
            Commands::Session(args) => session::execute(args, config).await,
            Commands::Config(args) => config::execute(args, config, &self.config, self.format).await,
        }
    }
}

/// A wired context plus the receiving end of its notifier.
///
/// The CLI is the UI layer: events the services dispatch are printed when
/// a command flushes them.
pub struct Console {
    pub ctx: AppContext,
    events: UnboundedReceiver<ConsoleEvent>,
}

impl Console {
    /// Wire the context without signing in.
    pub async fn connect(config: AppConfig) -> Result<Self, AppError> {
        let (notifier, events) = ChannelNotifier::new();
        let ctx = AppContext::from_config(config, Arc::new(notifier)).await?;
        Ok(Self { ctx, events })
    }

    /// Wire the context and initialize the session for the configured
    /// user, replaying any request captured before the last expiry.
    pub async fn sign_in(config: AppConfig) -> Result<(Self, ReplayOutcome), AppError> {
        let user = configured_user(&config)?;
        let mut console = Self::connect(config).await?;
        let outcome = console.ctx.session.initialize(user).await?;
        console.flush();
        Ok((console, outcome))
    }

    /// Dispatch events through the context's notifier.
    pub fn dispatch(&self, events: Vec<ConsoleEvent>) {
        for event in events {
            self.ctx.notifier.dispatch(event);
        }
    }

    /// Print everything dispatched since the last flush.
    pub fn flush(&mut self) {
        for event in drain(&mut self.events) {
            output::print_event(&event);
        }
    }
}

/// The session user described by the `[auth]` section.
fn configured_user(config: &AppConfig) -> Result<SessionUser, AppError> {
    let user = match (&config.auth.id_token, &config.auth.username) {
        (Some(token), _) => SessionUser::from_id_token(token)?,
        (None, Some(username)) => SessionUser::named(username.clone()),
        (None, None) => {
            return Err(AppError::configuration(
                "No user configured: set auth.username or auth.id_token",
            ));
        }
    };

    Ok(match &config.api.token {
        Some(token) => user.with_access_token(token.clone()),
        None => user,
    })
}
