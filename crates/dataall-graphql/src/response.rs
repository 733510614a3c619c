//! GraphQL response envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use dataall_core::result::AppResult;

use crate::classify;
use crate::operation::OperationKind;

/// One entry of the `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlError {
    /// Human-readable message, surfaced verbatim.
    pub message: String,
    /// Path of the failing field.
    #[serde(default)]
    pub path: Option<Vec<Value>>,
    /// AppSync error type (e.g. `UnauthorizedException`).
    #[serde(default)]
    pub error_type: Option<String>,
    /// Free-form extensions (`code`, ...).
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl GraphqlError {
    /// An error with only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            error_type: None,
            extensions: None,
        }
    }

    /// `extensions.code`, when present.
    pub fn code(&self) -> Option<&str> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(Value::as_str)
    }
}

/// Either `data` or a non-empty `errors` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphqlResponse {
    /// Result data.
    #[serde(default)]
    pub data: Option<Value>,
    /// Errors; an empty array counts as no errors.
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

impl GraphqlResponse {
    /// A successful response.
    pub fn ok(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    /// A failed response with a single error.
    pub fn error(message: impl Into<String>) -> Self {
        Self::from_errors(vec![GraphqlError::message(message)])
    }

    /// A failed response.
    pub fn from_errors(errors: Vec<GraphqlError>) -> Self {
        Self {
            data: None,
            errors: Some(errors),
        }
    }

    /// The error surfaced to the user, if any.
    pub fn first_error(&self) -> Option<&GraphqlError> {
        self.errors.as_ref().and_then(|errors| errors.first())
    }

    /// Check `errors` first, then hand out `data`.
    pub fn into_data(self, kind: OperationKind) -> AppResult<Value> {
        if let Some(error) = self.first_error() {
            return Err(classify::classify(error, kind));
        }
        Ok(self.data.unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataall_core::ErrorKind;

    #[test]
    fn test_errors_checked_before_data() {
        let response: GraphqlResponse = serde_json::from_value(serde_json::json!({
            "data": {"deleteShareObject": null},
            "errors": [
                {"message": "There are shared items in this request.", "path": ["deleteShareObject"]},
                {"message": "second"}
            ]
        }))
        .expect("deserialize");

        let err = response.into_data(OperationKind::Mutation).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "There are shared items in this request.");
    }

    #[test]
    fn test_empty_errors_array_is_success() {
        let response: GraphqlResponse = serde_json::from_value(serde_json::json!({
            "data": {"ok": true},
            "errors": []
        }))
        .expect("deserialize");
        let data = response.into_data(OperationKind::Query).expect("data");
        assert_eq!(data["ok"], true);
    }
}
