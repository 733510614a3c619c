//! Core type definitions used across the console workspace.

pub mod id;
pub mod pagination;

pub use id::*;
pub use pagination::{Page, PageFilter};
