//! Notifier implementations.

pub mod channel;
pub mod log;

pub use channel::ChannelNotifier;
pub use log::LogNotifier;
