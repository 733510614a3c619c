//! Core traits defined in `dataall-core` and implemented by other crates.

pub mod notifier;
pub mod store;

pub use notifier::Notifier;
pub use store::KeyValueStore;
