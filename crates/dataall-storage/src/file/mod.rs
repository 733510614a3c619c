//! File-backed store.

pub mod store;

pub use store::FileStore;
