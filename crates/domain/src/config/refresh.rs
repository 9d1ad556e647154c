use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cadence of the location refresh job
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    /// Minimum seconds between two successful refresh cycles (default: 120)
    #[serde(default = "default_min_interval")]
    pub min_interval_secs: u64,

    /// Seconds the scheduler waits between refresh attempts (default: 5)
    #[serde(default = "default_tick_interval")]
    pub tick_interval_secs: u64,
}

impl RefreshConfig {
    pub fn min_interval(&self) -> Duration {
        Duration::from_secs(self.min_interval_secs)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            min_interval_secs: default_min_interval(),
            tick_interval_secs: default_tick_interval(),
        }
    }
}

fn default_min_interval() -> u64 {
    120
}

fn default_tick_interval() -> u64 {
    5
}
