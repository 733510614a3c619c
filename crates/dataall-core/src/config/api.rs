//! GraphQL API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Settings for the single GraphQL endpoint every operation is sent to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Full URL of the GraphQL endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Bearer token sent in the `Authorization` header, if already known.
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: default_request_timeout(),
            token: None,
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:5000/graphql/api".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    60
}
