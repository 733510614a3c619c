//! Local storage configuration.

use serde::{Deserialize, Serialize};

/// Where durable client-local state lives and which keys it uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Durable store provider: `"file"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Root directory of the file provider.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Durable key holding the pending replay record.
    #[serde(default = "default_request_info_key")]
    pub request_info_key: String,
    /// Session key cleared on logout and re-authentication.
    #[serde(default = "default_window_location_key")]
    pub window_location_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            directory: default_directory(),
            request_info_key: default_request_info_key(),
            window_location_key: default_window_location_key(),
        }
    }
}

fn default_provider() -> String {
    "file".to_string()
}

fn default_directory() -> String {
    "data/local-storage".to_string()
}

fn default_request_info_key() -> String {
    "requestInfo".to_string()
}

fn default_window_location_key() -> String {
    "window-location".to_string()
}
