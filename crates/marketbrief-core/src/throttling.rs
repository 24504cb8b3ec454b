use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::direct::NotKeyed;
use governor::state::InMemoryState;
use governor::{Quota, RateLimiter};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Paces the sequential fetch loop against a rate quota.
///
/// There is no retry path: a request waits for budget once, runs once.
#[derive(Clone)]
pub struct RequestPacer {
    limiter: Arc<DirectRateLimiter>,
}

impl RequestPacer {
    /// Allows `quota_limit` requests per `quota_window`.
    pub fn new(quota_window: Duration, quota_limit: u32) -> Self {
        Self {
            limiter: Arc::new(RateLimiter::direct(quota_from_window(
                quota_window,
                quota_limit,
            ))),
        }
    }

    /// One request every `delay`, no burst.
    pub fn with_min_delay(delay: Duration) -> Self {
        Self::new(delay, 1)
    }

    /// Waits until the limiter grants budget for one request.
    pub async fn ready(&self) {
        self.limiter.until_ready().await;
    }

    /// Non-blocking probe, used by tests.
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

fn quota_from_window(quota_window: Duration, quota_limit: u32) -> Quota {
    let safe_limit = quota_limit.max(1);
    let burst = NonZeroU32::new(safe_limit).expect("safe limit must be non-zero");

    let seconds_per_cell = (quota_window.as_secs_f64() / f64::from(safe_limit)).max(0.001);
    let period = Duration::from_secs_f64(seconds_per_cell);

    Quota::with_period(period)
        .expect("period is always greater than zero")
        .allow_burst(burst)
}
