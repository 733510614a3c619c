//! Operation kinds and typed operations.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use dataall_core::error::AppError;
use dataall_core::result::AppResult;

use crate::request::GraphqlRequest;

/// Declared kind of a GraphQL operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Read-only query.
    Query,
    /// State-changing mutation.
    Mutation,
    /// Subscription (never replayed).
    Subscription,
}

impl OperationKind {
    /// Read the kind of the first definition in a document.
    ///
    /// Leading whitespace, commas and `#` comments are skipped. A document
    /// starting with `{` is the query shorthand.
    pub fn from_document(document: &str) -> AppResult<Self> {
        let mut rest = document;
        loop {
            rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',' || c == '\u{feff}');
            if let Some(comment) = rest.strip_prefix('#') {
                rest = comment.split_once('\n').map(|(_, tail)| tail).unwrap_or("");
                continue;
            }
            break;
        }

        if rest.starts_with('{') {
            return Ok(Self::Query);
        }

        let keyword: String = rest
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect();

        match keyword.as_str() {
            "query" => Ok(Self::Query),
            "mutation" => Ok(Self::Mutation),
            "subscription" => Ok(Self::Subscription),
            "" => Err(AppError::validation("GraphQL document has no operation")),
            other => Err(AppError::validation(format!(
                "GraphQL document starts with '{other}', expected an operation"
            ))),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => write!(f, "query"),
            Self::Mutation => write!(f, "mutation"),
            Self::Subscription => write!(f, "subscription"),
        }
    }
}

/// A request paired with the typed shape of its root field.
#[derive(Debug, Clone)]
pub struct Operation<T> {
    /// The wire request.
    pub request: GraphqlRequest,
    /// Kind declared by the document.
    pub kind: OperationKind,
    /// Root field of `data` holding the result.
    pub root_field: &'static str,
    _result: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Operation<T> {
    /// Create a query operation.
    pub fn query(root_field: &'static str, request: GraphqlRequest) -> Self {
        Self::with_kind(OperationKind::Query, root_field, request)
    }

    /// Create a mutation operation.
    pub fn mutation(root_field: &'static str, request: GraphqlRequest) -> Self {
        Self::with_kind(OperationKind::Mutation, root_field, request)
    }

    fn with_kind(kind: OperationKind, root_field: &'static str, request: GraphqlRequest) -> Self {
        Self {
            request,
            kind,
            root_field,
            _result: PhantomData,
        }
    }

    /// Operation name, for logs and notifications.
    pub fn name(&self) -> &str {
        &self.request.operation_name
    }

    /// Decode the root field out of a successful response's `data`.
    pub fn decode(&self, data: Value) -> AppResult<T> {
        let field = match data {
            Value::Object(mut map) => map.remove(self.root_field).unwrap_or(Value::Null),
            _ => Value::Null,
        };
        serde_json::from_value(field).map_err(|e| {
            AppError::with_source(
                dataall_core::ErrorKind::Serialization,
                format!(
                    "Unexpected response shape for {}.{}: {e}",
                    self.request.operation_name, self.root_field
                ),
                e,
            )
        })
    }
}
