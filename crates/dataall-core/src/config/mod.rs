//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section; every field has a default so a missing file still yields a
//! usable configuration.

pub mod api;
pub mod auth;
pub mod logging;
pub mod reauth;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::api::ApiConfig;
pub use self::auth::{AuthConfig, AuthPlatform};
pub use self::logging::LoggingConfig;
pub use self::reauth::ReauthConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// GraphQL API endpoint settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Authentication collaborator settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Re-authentication replay settings.
    #[serde(default)]
    pub reauth: ReauthConfig,
    /// Local storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the base file at `path` with an environment-specific overlay
    /// (`config/{env}.toml`) and environment variables prefixed with
    /// `DATAALL__` (e.g. `DATAALL__REAUTH__TTL_MINUTES=10`).
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DATAALL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an in-memory TOML string.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = AppConfig::from_toml("").expect("empty config");
        assert_eq!(config.reauth.ttl_minutes, 5);
        assert_eq!(config.storage.request_info_key, "requestInfo");
        assert_eq!(config.storage.window_location_key, "window-location");
        assert_eq!(config.auth.platform(), AuthPlatform::Amplify);
    }

    #[test]
    fn test_sections_override_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            endpoint = "https://api.example.com/graphql/api"

            [auth]
            custom_auth = "oidc"

            [reauth]
            ttl_minutes = 10
            "#,
        )
        .expect("config");
        assert_eq!(config.api.endpoint, "https://api.example.com/graphql/api");
        assert_eq!(config.reauth.ttl_minutes, 10);
        assert_eq!(
            config.auth.platform(),
            AuthPlatform::Custom("oidc".to_string())
        );
    }
}
