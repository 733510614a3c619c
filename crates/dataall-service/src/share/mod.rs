//! Share request lifecycle.

pub mod controller;
pub mod inputs;
pub mod policy;
pub mod service;
pub mod snapshot;

pub use controller::{ShareController, ShareOutcome};
pub use policy::ShareAction;
pub use service::ShareService;
pub use snapshot::ShareSnapshot;
