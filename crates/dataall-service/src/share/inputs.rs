//! Validated operation inputs.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use dataall_core::error::AppError;
use dataall_core::result::AppResult;
use dataall_core::types::{ItemUri, ShareItemUri};
use dataall_entity::share::ShareableType;

/// Reason given when rejecting a request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RejectInput {
    /// Trimmed reason.
    #[validate(length(min = 1, message = "A reject purpose is required"))]
    pub reject_purpose: String,
}

impl RejectInput {
    /// Trim and validate.
    pub fn new(reject_purpose: &str) -> AppResult<Self> {
        let input = Self {
            reject_purpose: reject_purpose.trim().to_string(),
        };
        check(&input)?;
        Ok(input)
    }
}

/// New text for the request or reject purpose.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PurposeInput {
    /// Trimmed text.
    #[validate(length(min = 1, max = 5000, message = "The purpose must not be empty"))]
    pub purpose: String,
}

impl PurposeInput {
    /// Trim and validate.
    pub fn new(purpose: &str) -> AppResult<Self> {
        let input = Self {
            purpose: purpose.trim().to_string(),
        };
        check(&input)?;
        Ok(input)
    }
}

/// Item to attach to a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemInput {
    /// Dataset item.
    pub item_uri: ItemUri,
    /// Kind of item.
    pub item_type: ShareableType,
}

impl AddItemInput {
    /// Validate the item reference.
    pub fn new(item_uri: ItemUri, item_type: ShareableType) -> AppResult<Self> {
        if item_uri.as_str().trim().is_empty() {
            return Err(AppError::validation("An item is required"));
        }
        Ok(Self {
            item_uri,
            item_type,
        })
    }
}

/// Share items an item operation applies to.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemSelection {
    /// Selected items, duplicates removed.
    #[validate(length(min = 1, message = "Select at least one item"))]
    pub item_uris: Vec<ShareItemUri>,
}

impl ItemSelection {
    /// Deduplicate (keeping order) and validate.
    pub fn new(item_uris: &[ShareItemUri]) -> AppResult<Self> {
        let mut unique: Vec<ShareItemUri> = Vec::with_capacity(item_uris.len());
        for uri in item_uris {
            if !unique.contains(uri) {
                unique.push(uri.clone());
            }
        }
        let input = Self { item_uris: unique };
        check(&input)?;
        Ok(input)
    }
}

fn check(input: &impl Validate) -> AppResult<()> {
    input.validate().map_err(into_app_error)
}

/// First field message of a validation failure.
fn into_app_error(errors: ValidationErrors) -> AppError {
    let message = errors
        .field_errors()
        .into_values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string());
    AppError::validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataall_core::ErrorKind;

    #[test]
    fn test_blank_reject_purpose() {
        let err = RejectInput::new("   ").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "A reject purpose is required");
        assert_eq!(
            RejectInput::new("  missing approval  ").unwrap().reject_purpose,
            "missing approval"
        );
    }

    #[test]
    fn test_empty_selection() {
        let err = ItemSelection::new(&[]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Select at least one item");
    }

    #[test]
    fn test_selection_deduplicates() {
        let a = ShareItemUri::new("si-1");
        let b = ShareItemUri::new("si-2");
        let selection = ItemSelection::new(&[a.clone(), b.clone(), a.clone()]).unwrap();
        assert_eq!(selection.item_uris, vec![a, b]);
    }
}
