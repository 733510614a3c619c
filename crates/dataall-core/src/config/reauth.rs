//! Re-authentication replay configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Controls how long a captured request stays eligible for replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReauthConfig {
    /// Replay window in minutes, measured from capture time.
    #[serde(default = "default_ttl")]
    pub ttl_minutes: i64,
}

impl ReauthConfig {
    /// The replay window as a duration.
    pub fn ttl(&self) -> Duration {
        Duration::minutes(self.ttl_minutes)
    }
}

impl Default for ReauthConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: default_ttl(),
        }
    }
}

fn default_ttl() -> i64 {
    5
}
