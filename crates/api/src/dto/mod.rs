pub mod cache;
pub mod map;

pub use cache::CacheStatsResponse;
pub use map::MapPointResponse;
