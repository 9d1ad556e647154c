//! Livemap Application Layer
//!
//! Ports describe the collaborators the refresh engine talks to; use cases
//! hold the refresh cycle and the read paths used by the HTTP layer.
pub mod ports;
pub mod services;
pub mod use_cases;
