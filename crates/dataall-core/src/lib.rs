//! # dataall-core
//!
//! Core crate for the data.all console. Contains traits, configuration
//! schemas, typed resource URIs, notification events, pagination types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other console crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
