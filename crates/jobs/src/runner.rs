use crate::LocationRefreshJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_location_refresh(LocationRefreshJob::new(refresh).with_cancellation(token))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    location_refresh: Option<LocationRefreshJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            location_refresh: None,
        }
    }

    pub fn with_location_refresh(mut self, job: LocationRefreshJob) -> Self {
        self.location_refresh = Some(job);
        self
    }

    /// Start all registered background jobs.
    ///
    /// The returned handles finish once each job has observed its cancellation.
    pub async fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");
        let mut handles = Vec::new();

        if let Some(job) = self.location_refresh {
            handles.push(Arc::new(job).start().await);
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
