pub mod cache;
pub mod locations;

// Re-export use cases
pub use cache::GetCacheStatsUseCase;
pub use locations::{
    GetMapSnapshotUseCase, RefreshLocationsUseCase, RefreshOutcome, RefreshPolicy,
    RefreshSummary,
};
