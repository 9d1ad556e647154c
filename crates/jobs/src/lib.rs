pub mod location_refresh;
pub mod runner;

pub use location_refresh::LocationRefreshJob;
pub use runner::JobRunner;
