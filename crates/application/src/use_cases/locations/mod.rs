pub mod get_map_snapshot;
pub mod refresh_locations;

pub use get_map_snapshot::GetMapSnapshotUseCase;
pub use refresh_locations::{
    RefreshLocationsUseCase, RefreshOutcome, RefreshPolicy, RefreshSummary,
};
