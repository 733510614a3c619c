//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use dataall_core::config::ApiConfig;
use dataall_core::error::{AppError, ErrorKind};
use dataall_core::result::AppResult;

use super::GraphqlTransport;
use crate::request::GraphqlRequest;
use crate::response::GraphqlResponse;

/// POSTs requests to the configured endpoint with a bearer token.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    token: RwLock<Option<String>>,
}

impl HttpTransport {
    /// Build the HTTP client from the API configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: RwLock::new(config.token.clone()),
        })
    }

    /// The endpoint requests go to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for HttpTransport {
    async fn send(&self, request: &GraphqlRequest) -> AppResult<GraphqlResponse> {
        debug!(
            endpoint = %self.endpoint,
            operation = %request.operation_name,
            "Sending GraphQL request"
        );

        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(token) = self.token.read().await.as_deref() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Transport,
                format!("Request {} failed: {e}", request.operation_name),
                e,
            )
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!(operation = %request.operation_name, "Backend rejected the session token");
            return Err(AppError::auth_expired("The session has expired"));
        }
        if !status.is_success() {
            return Err(AppError::transport(format!(
                "Request {} failed with HTTP {status}",
                request.operation_name
            )));
        }

        response.json::<GraphqlResponse>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Invalid GraphQL response for {}: {e}", request.operation_name),
                e,
            )
        })
    }

    async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_token_can_be_replaced() {
        let transport = HttpTransport::new(&ApiConfig::default()).expect("client");
        assert_eq!(transport.endpoint(), ApiConfig::default().endpoint);
        transport.set_token(Some("abc".to_string())).await;
        assert_eq!(transport.token.read().await.as_deref(), Some("abc"));
        transport.set_token(None).await;
        assert!(transport.token.read().await.is_none());
    }
}
