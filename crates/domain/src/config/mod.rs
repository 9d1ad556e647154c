//! Configuration module for Livemap
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP binding and CORS
//! - `database`: Account database connection
//! - `refresh`: Refresh cooldown and scheduler cadence
//! - `lookup`: Geolocation service endpoint, timeout and quota
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod database;
pub mod errors;
pub mod logging;
pub mod lookup;
pub mod refresh;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use lookup::LookupConfig;
pub use refresh::RefreshConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
