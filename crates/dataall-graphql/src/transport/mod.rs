//! Transport abstraction over the single GraphQL endpoint.

pub mod http;

use async_trait::async_trait;

use dataall_core::result::AppResult;

use crate::operation::{Operation, OperationKind};
use crate::request::GraphqlRequest;
use crate::response::GraphqlResponse;

pub use http::HttpTransport;

/// Sends a request and returns the raw envelope.
///
/// Implementations return `Err` only when no GraphQL envelope was produced
/// (network failure, non-2xx status, unreadable body). An HTTP 401 maps to
/// `AuthExpired`. Backend failures travel inside the envelope's `errors`.
#[async_trait]
pub trait GraphqlTransport: Send + Sync + std::fmt::Debug + 'static {
    /// Send one request.
    async fn send(&self, request: &GraphqlRequest) -> AppResult<GraphqlResponse>;

    /// Replace the bearer token after a session is (re)initialized.
    async fn set_token(&self, _token: Option<String>) {}
}

/// Send a typed operation and decode its root field.
pub async fn execute<T>(
    transport: &dyn GraphqlTransport,
    operation: &Operation<T>,
) -> AppResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let response = transport.send(&operation.request).await?;
    let data = response.into_data(operation.kind)?;
    operation.decode(data)
}

/// Send a raw request, classifying errors by the document's declared kind.
pub async fn execute_raw(
    transport: &dyn GraphqlTransport,
    request: &GraphqlRequest,
) -> AppResult<serde_json::Value> {
    let kind = request.kind().unwrap_or(OperationKind::Query);
    let response = transport.send(request).await?;
    response.into_data(kind)
}
