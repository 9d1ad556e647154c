use serde::{Deserialize, Serialize};
use std::time::Duration;

/// External geolocation service and the quota it imposes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Base URL; the address is appended as the last path segment
    /// (default: "http://ip-api.com/json")
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Lookups allowed per quota window (default: 150)
    #[serde(default = "default_quota")]
    pub quota: u32,

    /// Length of a quota window in seconds (default: 60)
    #[serde(default = "default_quota_window")]
    pub quota_window_secs: u64,
}

impl LookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn quota_window(&self) -> Duration {
        Duration::from_secs(self.quota_window_secs)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
            quota: default_quota(),
            quota_window_secs: default_quota_window(),
        }
    }
}

fn default_endpoint() -> String {
    "http://ip-api.com/json".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_quota() -> u32 {
    150
}

fn default_quota_window() -> u64 {
    60
}
