use async_trait::async_trait;
use livemap_domain::DomainError;
use std::sync::Arc;

#[async_trait]
pub trait ActiveAddressSource: Send + Sync {
    /// Addresses of every currently-online session.
    ///
    /// An empty list means nobody is online; `Err` means the source could not
    /// be queried. Callers treat the two differently.
    async fn fetch_active_addresses(&self) -> Result<Vec<Arc<str>>, DomainError>;
}
