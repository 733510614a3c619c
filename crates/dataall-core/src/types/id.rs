//! Newtype wrappers around the opaque, server-assigned URIs data.all uses
//! to identify resources.
//!
//! Using distinct types prevents accidentally passing a `ShareItemUri`
//! where a `ShareUri` is expected. The backend never documents the URI
//! format, so the wrappers only reject empty strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Macro to define a newtype URI wrapper around `String`.
macro_rules! define_uri {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing URI string.
            pub fn new(uri: impl Into<String>) -> Self {
                Self(uri.into())
            }

            /// Return the URI as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(AppError::validation(concat!(
                        stringify!($name),
                        " must not be empty"
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_uri!(
    /// Identifier of a share request (ShareObject).
    ShareUri
);

define_uri!(
    /// Identifier of one item attached to a share request.
    ShareItemUri
);

define_uri!(
    /// Identifier of the underlying dataset sub-resource (table, folder, bucket).
    ItemUri
);

define_uri!(
    /// Identifier of a dataset.
    DatasetUri
);

define_uri!(
    /// Identifier of an environment.
    EnvironmentUri
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_uri() {
        let uri = ShareUri::new("share-8h2k1x");
        assert_eq!(uri.to_string(), "share-8h2k1x");
        assert_eq!(uri.as_str(), "share-8h2k1x");
    }

    #[test]
    fn test_from_str_trims_and_rejects_empty() {
        let uri: ShareItemUri = "  item-1 ".parse().expect("should parse");
        assert_eq!(uri.as_str(), "item-1");
        assert!("   ".parse::<ShareItemUri>().is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let uri = ItemUri::new("tbl-42");
        let json = serde_json::to_string(&uri).expect("serialize");
        assert_eq!(json, "\"tbl-42\"");
        let parsed: ItemUri = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, uri);
    }
}
