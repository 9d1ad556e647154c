pub mod active_address_source;
pub mod location_resolver;
pub mod location_store;

pub use active_address_source::ActiveAddressSource;
pub use location_resolver::LocationResolver;
pub use location_store::LocationStore;
