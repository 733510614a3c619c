//! Convenience result type alias for the console.

use crate::error::AppError;

/// A specialized `Result` type for console operations.
///
/// Every remote call, storage access and state transition in the workspace
/// resolves to this type so call sites can propagate with `?`.
pub type AppResult<T> = Result<T, AppError>;
