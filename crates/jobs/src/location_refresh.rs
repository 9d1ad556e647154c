use livemap_application::use_cases::{RefreshLocationsUseCase, RefreshOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Drives the refresh engine: run a cycle, wait one tick, repeat.
///
/// The engine applies its own cooldown, so most ticks return immediately.
/// Shutdown is observed between cycles and while waiting, never in the middle
/// of a cycle.
pub struct LocationRefreshJob {
    refresh: Arc<RefreshLocationsUseCase>,
    tick_interval: Duration,
    shutdown: CancellationToken,
}

impl LocationRefreshJob {
    pub fn new(refresh: Arc<RefreshLocationsUseCase>) -> Self {
        Self {
            refresh,
            tick_interval: Duration::from_secs(5),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            tick_secs = self.tick_interval.as_secs(),
            "Starting location refresh job"
        );

        tokio::spawn(async move {
            loop {
                if self.shutdown.is_cancelled() {
                    break;
                }

                match self.refresh.execute().await {
                    Ok(RefreshOutcome::Completed(summary)) => {
                        debug!(resolved = summary.resolved, "Refresh cycle finished");
                    }
                    Ok(RefreshOutcome::CoolingDown) | Ok(RefreshOutcome::NoActiveAddresses) => {}
                    Err(e) => {
                        error!(error = %e, "Location refresh failed, retrying next tick");
                    }
                }

                tokio::select! {
                    _ = self.shutdown.cancelled() => break,
                    _ = tokio::time::sleep(self.tick_interval) => {}
                }
            }
            info!("LocationRefreshJob: shutting down");
        })
    }
}
