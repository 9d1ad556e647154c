use livemap_domain::{CacheStats, LocationRecord, MapPoint};
use std::sync::Arc;

/// Append-only store of resolved locations shared by the refresh engine and
/// the HTTP layer.
pub trait LocationStore: Send + Sync {
    fn try_get(&self, address: &str) -> Option<Arc<LocationRecord>>;

    /// Insert `record` under `record.address` unless a record already exists.
    /// Returns `false` and keeps the existing record in that case.
    fn insert_if_absent(&self, record: LocationRecord) -> bool;

    /// Point-in-time projection of every cached record.
    fn snapshot(&self) -> Vec<MapPoint>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn stats(&self) -> CacheStats;
}
