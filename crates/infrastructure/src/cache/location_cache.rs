use super::CacheMetrics;
use arc_swap::ArcSwap;
use livemap_application::ports::LocationStore;
use livemap_domain::{CacheStats, LocationRecord, MapPoint};
use rustc_hash::FxHashMap;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::debug;

type LocationMap = FxHashMap<Arc<str>, Arc<LocationRecord>>;

/// Append-only, memory-only location cache.
///
/// The whole map is copy-on-write behind an `ArcSwap`: readers load the
/// current map without locking and keep a consistent view for as long as they
/// hold it, while an insert publishes a new map containing the fully built
/// record. A reader therefore sees a key either with its complete record or
/// not at all.
pub struct InMemoryLocationCache {
    entries: ArcSwap<LocationMap>,
    metrics: CacheMetrics,
}

impl InMemoryLocationCache {
    pub fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(LocationMap::default()),
            metrics: CacheMetrics::default(),
        }
    }
}

impl Default for InMemoryLocationCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationStore for InMemoryLocationCache {
    fn try_get(&self, address: &str) -> Option<Arc<LocationRecord>> {
        match self.entries.load().get(address) {
            Some(record) => {
                self.metrics.record_hit();
                Some(Arc::clone(record))
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    fn insert_if_absent(&self, record: LocationRecord) -> bool {
        if self.entries.load().contains_key(&record.address) {
            self.metrics.duplicate_inserts.fetch_add(1, Ordering::Relaxed);
            return false;
        }

        let record = Arc::new(record);
        let mut inserted = false;

        // Every insert copies the map, O(n) each. Inserts are bounded by the
        // lookup quota, reads are constant and lock-free.
        // rcu retries the closure if another writer swapped the map meanwhile,
        // so the presence check and the insert act on the same version.
        self.entries.rcu(|current| {
            if current.contains_key(&record.address) {
                inserted = false;
                return Arc::clone(current);
            }
            let mut next = LocationMap::clone(current);
            next.insert(Arc::clone(&record.address), Arc::clone(&record));
            inserted = true;
            Arc::new(next)
        });

        if inserted {
            self.metrics.insertions.fetch_add(1, Ordering::Relaxed);
            debug!(address = %record.address, "Location inserted into cache");
        } else {
            self.metrics.duplicate_inserts.fetch_add(1, Ordering::Relaxed);
        }
        inserted
    }

    fn snapshot(&self) -> Vec<MapPoint> {
        let entries = self.entries.load();
        entries.values().map(|record| record.to_map_point()).collect()
    }

    fn len(&self) -> usize {
        self.entries.load().len()
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            insertions: self.metrics.insertions.load(Ordering::Relaxed),
            duplicate_inserts: self.metrics.duplicate_inserts.load(Ordering::Relaxed),
            hits: self.metrics.hits.load(Ordering::Relaxed),
            misses: self.metrics.misses.load(Ordering::Relaxed),
        }
    }
}
