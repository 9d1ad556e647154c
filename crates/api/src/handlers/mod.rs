pub mod cache;
pub mod health;
pub mod map;

pub use cache::get_cache_stats;
pub use health::health_check;
pub use map::{get_map, method_not_allowed};
