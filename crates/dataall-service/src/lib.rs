//! # dataall-service
//!
//! Application layer of the data.all console. Each service orchestrates
//! the GraphQL transport, the client-local stores and the notifier to
//! implement one console use case:
//!
//! - [`ShareController`]: lifecycle of one share request, gated by the
//!   viewer's role and the request's status, re-fetched after every
//!   successful mutation.
//! - [`ReplayService`]: captures a request that failed because the
//!   session expired and replays it once after the session is renewed.
//! - [`SessionService`]: session initialization, re-auth prompt, logout.
//!
//! Services follow constructor injection; [`AppContext`] wires them.

pub mod client;
pub mod context;
pub mod notify;
pub mod replay;
pub mod session;
pub mod share;

pub use client::ApiClient;
pub use context::AppContext;
pub use notify::{ChannelNotifier, LogNotifier};
pub use replay::{DiscardReason, ReplayOutcome, ReplayService, RequestInfo, RequestInfoStore};
pub use session::{SessionService, SessionState};
pub use share::{ShareAction, ShareController, ShareOutcome, ShareService, ShareSnapshot};
