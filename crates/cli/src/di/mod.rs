use livemap_api::AppState;
use livemap_application::use_cases::{
    GetCacheStatsUseCase, GetMapSnapshotUseCase, RefreshLocationsUseCase, RefreshPolicy,
};
use livemap_domain::Config;
use livemap_infrastructure::{IpApiLocationResolver, InMemoryLocationCache, SqlActiveAddressSource};
use sqlx::AnyPool;
use std::sync::Arc;

/// Everything built once at startup and shared for the process lifetime.
pub struct Services {
    pub refresh: Arc<RefreshLocationsUseCase>,
    pub get_map_snapshot: Arc<GetMapSnapshotUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
}

impl Services {
    pub fn build(config: &Config, pool: AnyPool) -> anyhow::Result<Self> {
        let cache = Arc::new(InMemoryLocationCache::new());

        let source = Arc::new(
            SqlActiveAddressSource::new(pool)
                .with_query(config.database.active_addresses_query.clone()),
        );
        let resolver = Arc::new(IpApiLocationResolver::new(
            config.lookup.endpoint.clone(),
            config.lookup.timeout(),
        )?);

        let refresh = Arc::new(RefreshLocationsUseCase::new(
            source,
            resolver,
            cache.clone(),
            RefreshPolicy::from_config(config),
        ));

        Ok(Self {
            refresh,
            get_map_snapshot: Arc::new(GetMapSnapshotUseCase::new(cache.clone())),
            get_cache_stats: Arc::new(GetCacheStatsUseCase::new(cache)),
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            get_map_snapshot: self.get_map_snapshot.clone(),
            get_cache_stats: self.get_cache_stats.clone(),
        }
    }
}
