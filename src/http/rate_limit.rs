//! Request pacing
//!
//! Uses the governor crate to enforce a minimum interval between page
//! requests. The first request passes immediately; each subsequent request
//! waits until the configured interval has elapsed since the previous one.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::sync::Arc;
use std::time::Duration;

/// Paces page requests to respect API rate limits.
///
/// A zero interval disables pacing entirely.
#[derive(Clone)]
pub struct RequestPacer {
    limiter: Option<Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>>,
}

impl RequestPacer {
    /// Create a pacer enforcing `min_interval` between requests
    pub fn new(min_interval: Duration) -> Self {
        let limiter = Quota::with_period(min_interval)
            .map(|quota| Arc::new(Governor::direct(quota)));

        Self { limiter }
    }

    /// Create a pacer that never waits
    pub fn unlimited() -> Self {
        Self { limiter: None }
    }

    /// Wait until the next request may be made
    pub async fn wait(&self) {
        if let Some(ref limiter) = self.limiter {
            limiter.until_ready().await;
        }
    }

    /// Check whether pacing is enabled
    pub fn is_enabled(&self) -> bool {
        self.limiter.is_some()
    }
}

impl std::fmt::Debug for RequestPacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestPacer")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
