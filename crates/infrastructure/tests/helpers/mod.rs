mod ip_api_mock;

pub use ip_api_mock::{MockIpApiServer, MockReply};
