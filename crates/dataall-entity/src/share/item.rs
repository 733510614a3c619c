//! Share item entity.

use serde::{Deserialize, Serialize};

use dataall_core::types::{ItemUri, ShareItemUri};

use super::status::{HealthStatus, ShareItemStatus};

/// Kind of dataset sub-resource a share item points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShareableType {
    /// A Glue table.
    Table,
    /// A folder (S3 prefix).
    StorageLocation,
    /// A whole S3 bucket.
    S3Bucket,
}

impl ShareableType {
    /// Return the type as the backend spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::StorageLocation => "StorageLocation",
            Self::S3Bucket => "S3Bucket",
        }
    }
}

impl std::fmt::Display for ShareableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShareableType {
    type Err = dataall_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Table" => Ok(Self::Table),
            "StorageLocation" | "Folder" => Ok(Self::StorageLocation),
            "S3Bucket" | "Bucket" => Ok(Self::S3Bucket),
            other => Err(dataall_core::AppError::validation(format!(
                "Unknown item type '{other}'. Supported: Table, StorageLocation, S3Bucket"
            ))),
        }
    }
}

/// One dataset sub-resource attached to a share request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareItem {
    /// Identifier of the attachment.
    pub share_item_uri: ShareItemUri,
    /// Identifier of the underlying table, folder or bucket.
    pub item_uri: ItemUri,
    /// Kind of the underlying resource.
    pub item_type: ShareableType,
    /// Display name.
    #[serde(default)]
    pub item_name: String,
    /// Share/revoke lifecycle status.
    pub status: ShareItemStatus,
    /// Last action the backend ran on the item.
    #[serde(default)]
    pub action: Option<String>,
    /// Health status; `null` means never verified.
    #[serde(default)]
    pub health_status: Option<HealthStatus>,
    /// Pipe-delimited list of health errors.
    #[serde(default)]
    pub health_message: Option<String>,
    /// When the item was last verified.
    #[serde(default)]
    pub last_verification_time: Option<String>,
    /// Data filter attached to a table item.
    #[serde(default)]
    pub attached_data_filter_uri: Option<String>,
}

impl ShareItem {
    /// Health status with `null` folded into `Undefined`.
    pub fn health(&self) -> HealthStatus {
        self.health_status.unwrap_or_default()
    }

    /// The individual health error strings.
    pub fn health_messages(&self) -> Vec<&str> {
        self.health_message
            .as_deref()
            .map(|msg| {
                msg.split('|')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
