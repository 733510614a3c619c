//! Share request CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use super::Console;
use crate::output::{self, OutputFormat, or_dash};
use dataall_core::config::AppConfig;
use dataall_core::error::AppError;
use dataall_core::types::{ItemUri, Page, PageFilter, ShareItemUri, ShareUri};
use dataall_entity::share::{ShareItem, ShareSummary, ShareableType};
use dataall_service::share::policy;
use dataall_service::{ShareController, ShareOutcome, ShareSnapshot};

/// Arguments for share commands
#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Share subcommand
    #[command(subcommand)]
    pub command: ShareCommand,
}

/// Share subcommands
#[derive(Debug, Subcommand)]
pub enum ShareCommand {
    /// Show a share request with its items and consumption data
    Show {
        /// Share request URI
        share_uri: ShareUri,
        /// Items page number
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Items page size
        #[arg(long, default_value_t = 10)]
        page_size: u64,
    },
    /// List requests addressed to you
    Inbox {
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Page size
        #[arg(long, default_value_t = 10)]
        page_size: u64,
    },
    /// List requests you created
    Outbox {
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Page size
        #[arg(long, default_value_t = 10)]
        page_size: u64,
    },
    /// Submit (or resubmit) a request
    Submit {
        /// Share request URI
        share_uri: ShareUri,
    },
    /// Approve a submitted request
    Approve {
        /// Share request URI
        share_uri: ShareUri,
    },
    /// Reject a submitted request
    Reject {
        /// Share request URI
        share_uri: ShareUri,
        /// Why the request is rejected
        #[arg(short, long)]
        reason: String,
    },
    /// Delete a request
    Delete {
        /// Share request URI
        share_uri: ShareUri,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Attach a dataset item to a request
    AddItem {
        /// Share request URI
        share_uri: ShareUri,
        /// Dataset item URI
        item_uri: ItemUri,
        /// Item type: Table, StorageLocation or S3Bucket
        #[arg(short = 't', long = "type")]
        item_type: ShareableType,
    },
    /// Detach an item from a request
    RemoveItem {
        /// Share request URI
        share_uri: ShareUri,
        /// Share item URI
        share_item_uri: ShareItemUri,
    },
    /// Revoke access to shared items
    Revoke {
        /// Share request URI
        share_uri: ShareUri,
        /// Share item URIs
        items: Vec<ShareItemUri>,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Start a health verification of shared items
    Verify {
        /// Share request URI
        share_uri: ShareUri,
        /// Share item URIs
        items: Vec<ShareItemUri>,
    },
    /// Re-apply the grants of shared items
    Reapply {
        /// Share request URI
        share_uri: ShareUri,
        /// Share item URIs
        items: Vec<ShareItemUri>,
    },
    /// Change the request purpose
    UpdatePurpose {
        /// Share request URI
        share_uri: ShareUri,
        /// New purpose
        purpose: String,
    },
    /// Change the reject purpose
    UpdateRejectPurpose {
        /// Share request URI
        share_uri: ShareUri,
        /// New purpose
        purpose: String,
    },
}

/// Share item display row
#[derive(Debug, Serialize, Tabled)]
struct ItemRow {
    /// Share item URI
    uri: String,
    /// Item name
    name: String,
    /// Item type
    #[tabled(rename = "type")]
    item_type: String,
    /// Status
    status: String,
    /// Health
    health: String,
}

impl From<&ShareItem> for ItemRow {
    fn from(item: &ShareItem) -> Self {
        Self {
            uri: item.share_item_uri.to_string(),
            name: item.item_name.clone(),
            item_type: item.item_type.to_string(),
            status: item.status.to_string(),
            health: item.health().to_string(),
        }
    }
}

/// Share listing display row
#[derive(Debug, Serialize, Tabled)]
struct SummaryRow {
    /// Share request URI
    uri: String,
    /// Dataset
    dataset: String,
    /// Requester
    principal: String,
    /// Owner
    owner: String,
    /// Status
    status: String,
    /// Shared items
    shared: u64,
    /// Pending items
    pending: u64,
    /// Failed items
    failed: u64,
}

impl From<&ShareSummary> for SummaryRow {
    fn from(s: &ShareSummary) -> Self {
        Self {
            uri: s.share_uri.to_string(),
            dataset: s.dataset.dataset_name.clone(),
            principal: s
                .principal
                .principal_name
                .clone()
                .unwrap_or_else(|| s.principal.principal_id.clone()),
            owner: s.owner.clone(),
            status: s.status.to_string(),
            shared: s.statistics.shared_items,
            pending: s.statistics.pending_items,
            failed: s.statistics.failed_items,
        }
    }
}

/// Execute share commands
pub async fn execute(
    args: &ShareArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (mut console, _) = Console::sign_in(config).await?;
    let result = run(&args.command, &console, format).await;
    console.flush();
    result
}

async fn run(
    command: &ShareCommand,
    console: &Console,
    format: OutputFormat,
) -> Result<(), AppError> {
    match command {
        ShareCommand::Show {
            share_uri,
            page,
            page_size,
        } => {
            let mut controller = console
                .ctx
                .share_controller(share_uri.clone())
                .with_items_filter(PageFilter::new(*page, *page_size));
            let snapshot = controller.load().await?;
            print_snapshot(snapshot, format);
        }
        ShareCommand::Inbox { page, page_size } => {
            let summaries = console
                .ctx
                .shares
                .inbox(&PageFilter::new(*page, *page_size))
                .await?;
            print_summaries(&summaries, format);
        }
        ShareCommand::Outbox { page, page_size } => {
            let summaries = console
                .ctx
                .shares
                .outbox(&PageFilter::new(*page, *page_size))
                .await?;
            print_summaries(&summaries, format);
        }
        ShareCommand::Submit { share_uri } => {
            let mut controller = console.ctx.share_controller(share_uri.clone());
            let outcome = controller.submit().await?;
            finish(console, &controller, &outcome);
        }
        ShareCommand::Approve { share_uri } => {
            let mut controller = console.ctx.share_controller(share_uri.clone());
            let outcome = controller.approve().await?;
            finish(console, &controller, &outcome);
        }
        ShareCommand::Reject { share_uri, reason } => {
            let mut controller = console.ctx.share_controller(share_uri.clone());
            let outcome = controller.reject(reason).await?;
            finish(console, &controller, &outcome);
        }
        ShareCommand::Delete { share_uri, yes } => {
            if !confirm(&format!("Delete share request {share_uri}?"), *yes)? {
                output::print_warning("Cancelled");
                return Ok(());
            }
            let mut controller = console.ctx.share_controller(share_uri.clone());
            let outcome = controller.delete().await?;
            finish(console, &controller, &outcome);
        }
        ShareCommand::AddItem {
            share_uri,
            item_uri,
            item_type,
        } => {
            let mut controller = console.ctx.share_controller(share_uri.clone());
            let outcome = controller.add_item(item_uri.clone(), *item_type).await?;
            finish(console, &controller, &outcome);
        }
        ShareCommand::RemoveItem {
            share_uri,
            share_item_uri,
        } => {
            let mut controller = console.ctx.share_controller(share_uri.clone());
            let outcome = controller.remove_item(share_item_uri).await?;
            finish(console, &controller, &outcome);
        }
        ShareCommand::Revoke {
            share_uri,
            items,
            yes,
        } => {
            if !items.is_empty()
                && !confirm(&format!("Revoke access to {} item(s)?", items.len()), *yes)?
            {
                output::print_warning("Cancelled");
                return Ok(());
            }
            let mut controller = console.ctx.share_controller(share_uri.clone());
            let outcome = controller.revoke_items(items).await?;
            finish(console, &controller, &outcome);
        }
        ShareCommand::Verify { share_uri, items } => {
            let mut controller = console.ctx.share_controller(share_uri.clone());
            let outcome = controller.verify_items(items).await?;
            finish(console, &controller, &outcome);
        }
        ShareCommand::Reapply { share_uri, items } => {
            let mut controller = console.ctx.share_controller(share_uri.clone());
            let outcome = controller.reapply_items(items).await?;
            finish(console, &controller, &outcome);
        }
        ShareCommand::UpdatePurpose { share_uri, purpose } => {
            let mut controller = console.ctx.share_controller(share_uri.clone());
            let outcome = controller.update_request_purpose(purpose).await?;
            finish(console, &controller, &outcome);
        }
        ShareCommand::UpdateRejectPurpose { share_uri, purpose } => {
            let mut controller = console.ctx.share_controller(share_uri.clone());
            let outcome = controller.update_reject_purpose(purpose).await?;
            finish(console, &controller, &outcome);
        }
    }

    Ok(())
}

/// Hand the outcome to the notifier and show where the request stands now.
fn finish(console: &Console, controller: &ShareController, outcome: &ShareOutcome) {
    console.dispatch(outcome.events());

    match controller.snapshot() {
        Some(snapshot) => output::print_kv("Status", snapshot.share.status.as_str()),
        None if !outcome.refreshed && outcome.navigate_to.is_none() => {
            output::print_warning("Could not refresh the share request, run `share show` again")
        }
        None => {}
    }
}

fn confirm(prompt: &str, assume_yes: bool) -> Result<bool, AppError> {
    if assume_yes {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}

fn print_summaries(page: &Page<ShareSummary>, format: OutputFormat) {
    let rows: Vec<SummaryRow> = page.nodes.iter().map(SummaryRow::from).collect();
    output::print_list(&rows, format);
    if format == OutputFormat::Table && page.pages > 1 {
        println!("Page {} of {} ({} requests)", page.page, page.pages, page.count);
    }
}

fn print_snapshot(snapshot: &ShareSnapshot, format: OutputFormat) {
    if format == OutputFormat::Json {
        output::print_item(&snapshot.share, format);
        return;
    }

    let share = &snapshot.share;
    let actions: Vec<&str> = policy::available_actions(share)
        .iter()
        .map(|a| a.as_str())
        .collect();

    output::print_kv("Share", share.share_uri.as_str());
    output::print_kv("Status", share.status.as_str());
    output::print_kv("Your role", &share.user_role_for_share_object.to_string());
    output::print_kv("Owner", &share.owner);
    output::print_kv("Created", &or_dash(share.created.as_deref()));
    output::print_kv(
        "Principal",
        &format!(
            "{} ({})",
            share
                .principal
                .principal_name
                .as_deref()
                .unwrap_or(&share.principal.principal_id),
            share.principal.principal_type
        ),
    );
    output::print_kv("Dataset", &share.dataset.dataset_name);
    output::print_kv("Request purpose", &or_dash(share.request_purpose.as_deref()));
    output::print_kv("Reject purpose", &or_dash(share.reject_purpose.as_deref()));
    output::print_kv("Actions", &actions.join(", "));

    println!();
    let rows: Vec<ItemRow> = share.items.nodes.iter().map(ItemRow::from).collect();
    output::print_list(&rows, format);
    if share.items.pages > 1 {
        println!("Page {} of {} ({} items)", share.items.page, share.items.pages, share.items.count);
    }

    for item in snapshot.items_where(|s| s.is_failed()) {
        output::print_warning(&format!("{} is {}", item.item_name, item.status));
    }

    for item in &snapshot.items {
        for message in item.health_messages() {
            output::print_warning(&format!("{}: {message}", item.item_name));
        }
    }

    if let Some(data) = &snapshot.consumption {
        println!();
        if let Some(cmd) = data.bucket_command() {
            output::print_kv("S3 bucket", &cmd);
        }
        if let (Some(region), Some(account)) = (
            share.dataset.region.as_deref(),
            share.dataset.aws_account_id.as_deref(),
        ) {
            if let Some(cmd) = data.access_point_command(region, account) {
                output::print_kv("S3 access point", &cmd);
            }
        }
        if let Some(query) = data.glue_query() {
            output::print_kv("Glue database", &query);
        }
    }
}
