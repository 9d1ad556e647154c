use crate::ports::LocationStore;
use livemap_domain::MapPoint;
use std::sync::Arc;

pub struct GetMapSnapshotUseCase {
    store: Arc<dyn LocationStore>,
}

impl GetMapSnapshotUseCase {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }

    /// Every cached location, projected to map coordinates.
    pub fn execute(&self) -> Vec<MapPoint> {
        self.store.snapshot()
    }
}
