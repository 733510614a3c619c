//! Re-authentication replay.
//!
//! When a request fails because the session expired, the request is
//! captured into a single durable slot. After the next successful session
//! initialization it is replayed exactly once, provided the same user
//! signed in again within the TTL. The slot is cleared in every terminal
//! outcome.

pub mod outcome;
pub mod record;
pub mod service;
pub mod store;

pub use outcome::{DiscardReason, ReplayOutcome};
pub use record::RequestInfo;
pub use service::ReplayService;
pub use store::RequestInfoStore;
