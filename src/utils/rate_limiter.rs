use std::sync::Arc;
use tokio::sync::{Mutex, OwnedSemaphorePermit, Semaphore};
use tokio::time::{sleep, Duration, Instant};
use tracing::debug;

use crate::models::error::StatsError;

/// Bounds concurrent upstream requests and spaces them out by a minimum delay.
#[derive(Clone)]
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    min_delay: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_concurrent: usize, min_delay_ms: u64) -> Self {
        RateLimiter {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            min_delay: Duration::from_millis(min_delay_ms),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Waits for a permit. The permit is released when the guard is dropped.
    pub async fn acquire(&self) -> Result<RateLimitGuard, StatsError> {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| StatsError::RateLimiterClosed)?;

        let mut last_request = self.last_request.lock().await;
        let wait = last_request
            .map(|last| self.min_delay.saturating_sub(last.elapsed()))
            .unwrap_or_default();
        if !wait.is_zero() {
            debug!(?wait, "spacing out upstream request");
            sleep(wait).await;
        }
        *last_request = Some(Instant::now());
        drop(last_request);

        Ok(RateLimitGuard { _permit: permit })
    }
}

/// Holds one upstream request slot.
pub struct RateLimitGuard {
    _permit: OwnedSemaphorePermit,
}
