//! Share request domain entities.

pub mod consumption;
pub mod item;
pub mod model;
pub mod principal;
pub mod status;

pub use consumption::ConsumptionData;
pub use item::{ShareItem, ShareableType};
pub use model::{ShareObject, ShareStatistics, ShareSummary};
pub use principal::{DatasetRef, Principal};
pub use status::{HealthStatus, ShareItemStatus, ShareObjectStatus, UserRole};
