use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::info;

/// Lookup quota over a window.
///
/// At most `quota` lookups begin inside any span of one window. When the
/// quota is spent, `acquire` sleeps for a whole window measured from that
/// point, so every counted lookup is at least a window old before the count
/// starts over. The count also starts over once no lookup has begun for a
/// whole window. The sleep blocks only the caller, which is the refresh task.
#[derive(Debug)]
pub struct QuotaGate {
    quota: u32,
    window: Duration,
    lookups_this_window: u32,
    last_lookup: Option<Instant>,
}

impl QuotaGate {
    pub fn new(quota: u32, window: Duration) -> Self {
        Self {
            quota: quota.max(1),
            window,
            lookups_this_window: 0,
            last_lookup: None,
        }
    }

    pub fn lookups_this_window(&self) -> u32 {
        self.lookups_this_window
    }

    /// Account for one lookup about to be issued.
    ///
    /// Returns `true` when the caller had to wait out a full window first.
    pub async fn acquire(&mut self) -> bool {
        if let Some(last) = self.last_lookup {
            if last.elapsed() >= self.window {
                self.lookups_this_window = 0;
            }
        }

        let mut paused = false;
        if self.lookups_this_window >= self.quota {
            info!(
                quota = self.quota,
                window_secs = self.window.as_secs(),
                "Lookup quota reached, pausing refresh for one window"
            );
            sleep(self.window).await;
            self.lookups_this_window = 0;
            paused = true;
        }

        self.last_lookup = Some(Instant::now());
        self.lookups_this_window += 1;
        paused
    }
}
