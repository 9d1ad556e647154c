use super::{ConfigError, DatabaseConfig, LoggingConfig, LookupConfig, RefreshConfig, ServerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration, loaded from TOML and adjusted by CLI flags
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub refresh: RefreshConfig,

    #[serde(default)]
    pub lookup: LookupConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; these win over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load from `config_path` (defaults when `None`) and apply overrides.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { reason, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(url) = overrides.database_url {
            self.database.url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database.url must not be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if self.lookup.endpoint.trim().is_empty() {
            return Err(ConfigError::Validation(
                "lookup.endpoint must not be empty".to_string(),
            ));
        }
        if self.lookup.quota == 0 {
            return Err(ConfigError::Validation(
                "lookup.quota must be at least 1".to_string(),
            ));
        }
        if self.lookup.quota_window_secs == 0 {
            return Err(ConfigError::Validation(
                "lookup.quota_window_secs must be at least 1".to_string(),
            ));
        }
        if self.lookup.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "lookup.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.refresh.tick_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "refresh.tick_interval_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
