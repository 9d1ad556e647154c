pub mod active_address_repository;

pub use active_address_repository::SqlActiveAddressSource;
