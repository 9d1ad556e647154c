use crate::ports::{ActiveAddressSource, LocationResolver, LocationStore};
use crate::services::QuotaGate;
use livemap_domain::{Config, DomainError};
use rustc_hash::FxHashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// Timing policy of the refresh engine
#[derive(Debug, Clone)]
pub struct RefreshPolicy {
    pub min_interval: Duration,
    pub quota: u32,
    pub quota_window: Duration,
}

impl RefreshPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            min_interval: config.refresh.min_interval(),
            quota: config.lookup.quota,
            quota_window: config.lookup.quota_window(),
        }
    }
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            min_interval: Duration::from_secs(120),
            quota: 150,
            quota_window: Duration::from_secs(60),
        }
    }
}

/// Counters for one completed refresh cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub active: usize,
    pub already_cached: usize,
    pub resolved: usize,
    pub failed: usize,
    pub quota_pauses: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The last successful cycle is more recent than the minimum interval.
    CoolingDown,
    /// Nobody is online. The cooldown is not advanced.
    NoActiveAddresses,
    Completed(RefreshSummary),
}

struct RefreshState {
    last_successful_refresh: Option<Instant>,
    quota: QuotaGate,
}

/// Use case: resolve locations for every active address not yet cached.
/// Driven periodically by the location refresh job.
pub struct RefreshLocationsUseCase {
    source: Arc<dyn ActiveAddressSource>,
    resolver: Arc<dyn LocationResolver>,
    store: Arc<dyn LocationStore>,
    min_interval: Duration,
    // Held for the whole cycle, so two cycles never interleave.
    state: Mutex<RefreshState>,
}

impl RefreshLocationsUseCase {
    pub fn new(
        source: Arc<dyn ActiveAddressSource>,
        resolver: Arc<dyn LocationResolver>,
        store: Arc<dyn LocationStore>,
        policy: RefreshPolicy,
    ) -> Self {
        Self {
            source,
            resolver,
            store,
            min_interval: policy.min_interval,
            state: Mutex::new(RefreshState {
                last_successful_refresh: None,
                quota: QuotaGate::new(policy.quota, policy.quota_window),
            }),
        }
    }

    #[instrument(skip(self), name = "refresh_locations")]
    pub async fn execute(&self) -> Result<RefreshOutcome, DomainError> {
        let mut state = self.state.lock().await;

        if let Some(last) = state.last_successful_refresh {
            if last.elapsed() < self.min_interval {
                return Ok(RefreshOutcome::CoolingDown);
            }
        }

        let addresses = self.source.fetch_active_addresses().await?;
        if addresses.is_empty() {
            debug!("No active addresses, nothing to refresh");
            return Ok(RefreshOutcome::NoActiveAddresses);
        }

        info!(count = addresses.len(), "Retrieved active addresses");

        let mut summary = RefreshSummary {
            active: addresses.len(),
            ..Default::default()
        };
        let mut seen: FxHashSet<Arc<str>> = FxHashSet::default();

        for address in addresses {
            if !seen.insert(Arc::clone(&address)) {
                continue;
            }

            if self.store.try_get(&address).is_some() {
                debug!(address = %address, "Already cached, skipping");
                summary.already_cached += 1;
                continue;
            }

            if state.quota.acquire().await {
                summary.quota_pauses += 1;
            }

            match self.resolver.resolve(&address).await {
                Ok(record) => {
                    if self.store.insert_if_absent(record) {
                        debug!(address = %address, "Cached location");
                        summary.resolved += 1;
                    } else {
                        summary.already_cached += 1;
                    }
                }
                Err(e) if e.is_lookup_error() => {
                    warn!(address = %address, error = %e, "Location lookup failed, will retry next cycle");
                    summary.failed += 1;
                }
                Err(e) => {
                    error!(address = %address, error = %e, "Location resolver error, will retry next cycle");
                    summary.failed += 1;
                }
            }
        }

        state.last_successful_refresh = Some(Instant::now());

        info!(
            active = summary.active,
            already_cached = summary.already_cached,
            resolved = summary.resolved,
            failed = summary.failed,
            quota_pauses = summary.quota_pauses,
            "Location refresh completed"
        );

        Ok(RefreshOutcome::Completed(summary))
    }
}
