pub mod location_cache;
pub mod metrics;

pub use location_cache::InMemoryLocationCache;
pub use metrics::CacheMetrics;
