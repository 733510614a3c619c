//! Authentication collaborator configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Selects which external authentication collaborator is active.
///
/// Neither the share controller nor the replay manager look at this; it is
/// reported by the session so the UI layer can pick a login flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Name of the custom (OIDC) provider. Unset selects the managed
    /// hosted-auth provider.
    #[serde(default)]
    pub custom_auth: Option<String>,
    /// Username to initialize the session with when no id token is given.
    #[serde(default)]
    pub username: Option<String>,
    /// JWT id token for the current user.
    #[serde(default)]
    pub id_token: Option<String>,
}

/// The authentication platform in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthPlatform {
    /// Managed hosted-auth provider.
    Amplify,
    /// Custom OIDC provider, by name.
    Custom(String),
}

impl AuthConfig {
    /// Resolve the active platform from the custom-auth flag.
    pub fn platform(&self) -> AuthPlatform {
        match self.custom_auth.as_deref() {
            Some(name) if !name.trim().is_empty() => AuthPlatform::Custom(name.to_string()),
            _ => AuthPlatform::Amplify,
        }
    }
}

impl fmt::Display for AuthPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amplify => write!(f, "Amplify"),
            Self::Custom(name) => write!(f, "{name}"),
        }
    }
}
