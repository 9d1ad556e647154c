use async_trait::async_trait;
use livemap_application::ports::ActiveAddressSource;
use livemap_domain::config::database::DEFAULT_ACTIVE_ADDRESSES_QUERY;
use livemap_domain::DomainError;
use sqlx::AnyPool;
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Reads the last known address of every online account
pub struct SqlActiveAddressSource {
    pool: AnyPool,
    query: String,
}

impl SqlActiveAddressSource {
    pub fn new(pool: AnyPool) -> Self {
        Self {
            pool,
            query: DEFAULT_ACTIVE_ADDRESSES_QUERY.to_string(),
        }
    }

    /// Override the query. It must return a single nullable text column.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }
}

#[async_trait]
impl ActiveAddressSource for SqlActiveAddressSource {
    #[instrument(skip(self))]
    async fn fetch_active_addresses(&self) -> Result<Vec<Arc<str>>, DomainError> {
        let rows = sqlx::query_scalar::<_, Option<String>>(&self.query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query online addresses");
                DomainError::DatabaseError(e.to_string())
            })?;

        let addresses: Vec<Arc<str>> = rows
            .into_iter()
            .flatten()
            .map(|addr| addr.trim().to_string())
            .filter(|addr| !addr.is_empty())
            .map(Arc::from)
            .collect();

        debug!(count = addresses.len(), "Online addresses loaded");
        Ok(addresses)
    }
}
