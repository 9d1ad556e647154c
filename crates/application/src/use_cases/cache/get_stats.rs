use crate::ports::LocationStore;
use livemap_domain::CacheStats;
use std::sync::Arc;

pub struct GetCacheStatsUseCase {
    store: Arc<dyn LocationStore>,
}

impl GetCacheStatsUseCase {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> CacheStats {
        self.store.stats()
    }
}
