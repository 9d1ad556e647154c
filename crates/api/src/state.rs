use livemap_application::use_cases::{GetCacheStatsUseCase, GetMapSnapshotUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_map_snapshot: Arc<GetMapSnapshotUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
}
