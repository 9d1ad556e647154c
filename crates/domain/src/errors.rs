use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("HTTP client error: {0}")]
    HttpClientError(String),

    #[error("Location lookup failed for {address}: {reason}")]
    LookupFailed { address: String, reason: String },

    #[error("Location lookup timed out for {0}")]
    LookupTimeout(String),

    #[error("Location lookup rejected for {address}: {message}")]
    LookupRejected { address: String, message: String },

    #[error("Invalid lookup response for {address}: {reason}")]
    InvalidResponse { address: String, reason: String },
}

impl DomainError {
    /// Per-address lookup errors. These never abort a refresh cycle.
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            DomainError::LookupFailed { .. }
                | DomainError::LookupTimeout(_)
                | DomainError::LookupRejected { .. }
                | DomainError::InvalidResponse { .. }
        )
    }
}
