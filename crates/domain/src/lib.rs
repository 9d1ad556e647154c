//! Livemap Domain Layer
pub mod config;
pub mod errors;
pub mod location;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use location::{CacheStats, LocationRecord, MapPoint};
