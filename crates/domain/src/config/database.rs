use serde::{Deserialize, Serialize};

pub const DEFAULT_ACTIVE_ADDRESSES_QUERY: &str =
    "SELECT DISTINCT last_ip FROM account WHERE online = 1";

/// Account database holding the online flag and last known address per account
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection URL (default: "mysql://root@127.0.0.1:3306/game")
    /// Any URL understood by sqlx's `Any` driver works, e.g. `sqlite://accounts.db`.
    #[serde(default = "default_url")]
    pub url: String,

    /// Maximum pooled connections (default: 4)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection (default: 5)
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Query returning one address column for every online session
    #[serde(default = "default_active_addresses_query")]
    pub active_addresses_query: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            active_addresses_query: default_active_addresses_query(),
        }
    }
}

fn default_url() -> String {
    "mysql://root@127.0.0.1:3306/game".to_string()
}

fn default_max_connections() -> u32 {
    4
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_active_addresses_query() -> String {
    DEFAULT_ACTIVE_ADDRESSES_QUERY.to_string()
}
