//! Livemap Infrastructure Layer
//!
//! Adapters behind the application ports: the account database, the
//! ip-api.com client and the in-memory location cache.
pub mod cache;
pub mod database;
pub mod geo;
pub mod repositories;

pub use cache::InMemoryLocationCache;
pub use geo::IpApiLocationResolver;
pub use repositories::SqlActiveAddressSource;
