//! Maps backend errors onto the console's error taxonomy.

use dataall_core::error::{AppError, ErrorKind};

use crate::operation::OperationKind;
use crate::response::GraphqlError;

const AUTH_ERROR_TYPES: [&str; 2] = ["UnauthorizedException", "UnauthenticatedException"];
const AUTH_CODES: [&str; 2] = ["UNAUTHENTICATED", "TOKEN_EXPIRED"];
const AUTH_MESSAGE_MARKERS: [&str; 4] = [
    "token has expired",
    "token is expired",
    "expired token",
    "session expired",
];

/// Whether the error is the session-expiry signal.
pub fn is_auth_expired(error: &GraphqlError) -> bool {
    if error
        .error_type
        .as_deref()
        .is_some_and(|t| AUTH_ERROR_TYPES.contains(&t))
    {
        return true;
    }
    if error.code().is_some_and(|c| AUTH_CODES.contains(&c)) {
        return true;
    }
    let message = error.message.to_ascii_lowercase();
    AUTH_MESSAGE_MARKERS.iter().any(|m| message.contains(m))
}

/// Turn the first backend error into an [`AppError`], keeping the message
/// verbatim.
///
/// Unrecognized failures of a mutation are conflicts: the backend refused
/// a state change. Unrecognized failures of a query stay `Unknown`.
pub fn classify(error: &GraphqlError, kind: OperationKind) -> AppError {
    let message = error.message.clone();
    let error_kind = if is_auth_expired(error) {
        ErrorKind::AuthExpired
    } else if message.contains("UnauthorizedOperation") {
        ErrorKind::Authorization
    } else if message.contains("ObjectNotFound") {
        ErrorKind::NotFound
    } else if message.contains("InvalidInput") || message.contains("RequiredParameter") {
        ErrorKind::Validation
    } else {
        match kind {
            OperationKind::Mutation => ErrorKind::Conflict,
            OperationKind::Query | OperationKind::Subscription => ErrorKind::Unknown,
        }
    };
    AppError::new(error_kind, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_expiry_signals() {
        let mut by_type = GraphqlError::message("Unauthorized");
        by_type.error_type = Some("UnauthorizedException".to_string());
        assert!(is_auth_expired(&by_type));

        let mut by_code = GraphqlError::message("denied");
        by_code.extensions = Some(serde_json::json!({"code": "UNAUTHENTICATED"}));
        assert!(is_auth_expired(&by_code));

        assert!(is_auth_expired(&GraphqlError::message("The incoming Token has expired")));
        assert!(!is_auth_expired(&GraphqlError::message("Share expired last week")));
    }

    #[test]
    fn test_classification() {
        let cases = [
            ("An error occurred (UnauthorizedOperation) when calling APPROVE", ErrorKind::Authorization),
            ("An error occurred (ObjectNotFound) ShareObject share-1", ErrorKind::NotFound),
            ("An error occurred (InvalidInput) rejectPurpose", ErrorKind::Validation),
            ("There are shared items in this request.", ErrorKind::Conflict),
        ];
        for (message, expected) in cases {
            let err = classify(&GraphqlError::message(message), OperationKind::Mutation);
            assert_eq!(err.kind, expected, "{message}");
            assert_eq!(err.message, message);
        }

        let query_err = classify(&GraphqlError::message("boom"), OperationKind::Query);
        assert_eq!(query_err.kind, ErrorKind::Unknown);
    }
}
