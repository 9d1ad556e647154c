pub mod ip_api;

pub use ip_api::IpApiLocationResolver;
