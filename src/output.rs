//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use dataall_core::events::{ConsoleEvent, NotificationLevel, SessionEvent};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a single item as JSON, or as its debug form for tables
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{item:#?}"),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}

/// Render one event the services asked the UI layer to show.
pub fn print_event(event: &ConsoleEvent) {
    match event {
        ConsoleEvent::Notify(n) => match n.level {
            NotificationLevel::Success => print_success(&n.message),
            NotificationLevel::Info => println!("ℹ {}", n.message),
            NotificationLevel::Warning => print_warning(&n.message),
            NotificationLevel::Error => print_error(&n.message),
        },
        ConsoleEvent::Navigate { pathname } => println!("→ {pathname}"),
        ConsoleEvent::Session(SessionEvent::Initialized { username }) => {
            println!("Signed in as {username}");
        }
        ConsoleEvent::Session(SessionEvent::ReauthRequired { operation_name }) => {
            match operation_name {
                Some(op) => print_warning(&format!(
                    "Session expired during {op}. Sign in again to retry it."
                )),
                None => print_warning("Session expired. Sign in again."),
            }
        }
        ConsoleEvent::Session(SessionEvent::LoggedOut) => println!("Signed out"),
    }
}

/// Display an optional value, or a dash.
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
