//! # dataall-storage
//!
//! Client-local key-value stores behind [`KeyValueStore`]:
//!
//! - `file`: durable, one file per key, survives restarts. Holds the
//!   pending re-authentication replay record.
//! - `memory`: volatile, lives as long as the process. Used as the
//!   session-scoped store and in tests.
//!
//! [`KeyValueStore`]: dataall_core::traits::KeyValueStore

#[cfg(feature = "file")]
pub mod file;
pub mod manager;
#[cfg(feature = "memory")]
pub mod memory;

pub use manager::StoreManager;
