use async_trait::async_trait;
use livemap_domain::{DomainError, LocationRecord};

#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Resolve one address against the external geolocation service.
    ///
    /// The returned record is keyed by `address` as given, not by whatever the
    /// service echoes back.
    async fn resolve(&self, address: &str) -> Result<LocationRecord, DomainError>;
}
