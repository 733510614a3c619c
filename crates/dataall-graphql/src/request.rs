//! Serializable GraphQL request descriptor.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use dataall_core::result::AppResult;

use crate::operation::OperationKind;

/// One query or mutation, exactly as it goes over the wire.
///
/// This is also what the replay manager persists, so the field names
/// follow the wire format (`operationName`, `query`, `variables`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    /// Name of the operation declared in the document.
    pub operation_name: String,
    /// The GraphQL document.
    pub query: String,
    /// Variables map.
    #[serde(default)]
    pub variables: Map<String, Value>,
}

impl GraphqlRequest {
    /// Create a request with no variables.
    pub fn new(operation_name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            operation_name: operation_name.into(),
            query: query.into(),
            variables: Map::new(),
        }
    }

    /// Add one variable. `null` values are kept; the backend distinguishes
    /// an explicit null from an absent argument.
    pub fn var(mut self, name: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.variables.insert(name.to_string(), value);
        self
    }

    /// Declared kind of the operation, read from the document.
    pub fn kind(&self) -> AppResult<OperationKind> {
        OperationKind::from_document(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let request = GraphqlRequest::new(
            "submitShareObject",
            "mutation submitShareObject($shareUri: String!) { submitShareObject(shareUri: $shareUri) { shareUri status } }",
        )
        .var("shareUri", "share-1");

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["operationName"], "submitShareObject");
        assert_eq!(json["variables"], serde_json::json!({"shareUri": "share-1"}));
        assert_eq!(request.kind().unwrap(), OperationKind::Mutation);
    }

    #[test]
    fn test_missing_variables_default_to_empty() {
        let request: GraphqlRequest = serde_json::from_value(serde_json::json!({
            "operationName": "getShareObject",
            "query": "query getShareObject { getShareObject { shareUri } }"
        }))
        .expect("deserialize");
        assert!(request.variables.is_empty());
    }
}
