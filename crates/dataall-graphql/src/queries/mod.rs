//! Typed operation builders, one module per backend area.

pub mod share;

pub use share::{AddedItem, ShareStatusAck};
