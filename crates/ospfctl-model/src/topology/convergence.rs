use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Bounds for the post-`construct` adjacency poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvergenceConfig {
    /// Give up after this many seconds.
    pub timeout_secs: u64,
    /// Delay between two polls of the same router.
    pub interval_secs: u64,
}

impl ConvergenceConfig {
    #[inline]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            interval_secs: 2,
        }
    }
}
