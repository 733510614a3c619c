//! Authenticated user of the current session.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use dataall_core::error::{AppError, ErrorKind};

/// The user a session was initialized for.
///
/// `name` is the identity the replay manager compares against the
/// username stored with a captured request; both authentication
/// collaborators use the e-mail address for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Stable user identifier.
    pub id: String,
    /// E-mail address.
    pub email: String,
    /// Username compared during replay.
    pub name: String,
    /// Short identifier, when the provider exposes one.
    #[serde(default)]
    pub short_id: Option<String>,
    /// Raw JWT id token.
    #[serde(default, skip_serializing)]
    pub id_token: Option<String>,
    /// Raw access token.
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    email: Option<String>,
    #[serde(rename = "cognito:username")]
    cognito_username: Option<String>,
    preferred_username: Option<String>,
}

impl SessionUser {
    /// A user known only by name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            email: name.clone(),
            name,
            short_id: None,
            id_token: None,
            access_token: None,
        }
    }

    /// Build a user from a JWT id token without verifying its signature.
    ///
    /// The token was issued to this client by the authentication
    /// collaborator; only the identity claims are read.
    pub fn from_id_token(id_token: &str) -> Result<Self, AppError> {
        let payload = id_token
            .split('.')
            .nth(1)
            .ok_or_else(|| AppError::validation("Malformed id token: missing payload"))?;

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Validation,
                    format!("Malformed id token payload: {e}"),
                    e,
                )
            })?;
        let claims: IdTokenClaims = serde_json::from_slice(&bytes)?;

        let email = claims
            .email
            .ok_or_else(|| AppError::validation("Id token carries no email claim"))?;

        Ok(Self {
            id: email.clone(),
            email: email.clone(),
            name: email,
            short_id: claims.cognito_username.or(claims.preferred_username),
            id_token: Some(id_token.to_string()),
            access_token: None,
        })
    }

    /// Attach the access token sent as bearer credential.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(claims: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn test_from_id_token_reads_email() {
        let token = token_with(serde_json::json!({
            "email": "alice@example.com",
            "cognito:username": "alice"
        }));
        let user = SessionUser::from_id_token(&token).expect("decode");
        assert_eq!(user.name, "alice@example.com");
        assert_eq!(user.short_id.as_deref(), Some("alice"));
        assert_eq!(user.id_token.as_deref(), Some(token.as_str()));
    }

    #[test]
    fn test_from_id_token_requires_email() {
        let token = token_with(serde_json::json!({"sub": "123"}));
        assert!(SessionUser::from_id_token(&token).is_err());
        assert!(SessionUser::from_id_token("not-a-jwt").is_err());
    }
}
