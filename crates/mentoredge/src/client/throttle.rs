//! Request throttle shared by every clone of the client.
//!
//! Installed as a middleware inside the retry layer, so every attempt,
//! including retries, waits for a permit.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use tokio::time::Instant;

use crate::config::api;

/// Enforces a minimum interval between outgoing requests.
///
/// Clones share one limiter, so concurrent keyword fetches are still
/// serialized through the same budget. A 429 with `Retry-After` holds back
/// every request until that delay has passed.
#[derive(Clone)]
pub struct Throttle {
    limiter: Option<Arc<DefaultDirectRateLimiter>>,
    interval: Duration,
    hold_until: Arc<Mutex<Option<Instant>>>,
}

impl Throttle {
    /// One request per `interval`; a zero interval disables throttling.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        let limiter =
            Quota::with_period(interval).map(|quota| Arc::new(RateLimiter::direct(quota)));
        Self { limiter, interval, hold_until: Arc::new(Mutex::new(None)) }
    }

    /// Wait until the next request may be sent.
    pub async fn wait(&self) {
        let hold = *self.hold_until.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(until) = hold {
            tokio::time::sleep_until(until).await;
        }

        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }

    /// Hold back all requests for `delay`, capped at [`api::MAX_RETRY_AFTER`].
    ///
    /// An earlier hold that ends later is kept.
    pub fn hold_for(&self, delay: Duration) {
        let until = Instant::now() + delay.min(api::MAX_RETRY_AFTER);
        let mut hold = self.hold_until.lock().unwrap_or_else(PoisonError::into_inner);
        if hold.is_none_or(|current| current < until) {
            *hold = Some(until);
        }
    }

    /// Configured minimum interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

/// Seconds from a `Retry-After` header, if present and numeric.
pub(crate) fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .map(Duration::from_secs)
}

#[async_trait::async_trait]
impl Middleware for Throttle {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut http::Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        self.wait().await;

        let response = next.run(req, extensions).await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            if let Some(delay) = retry_after(&response) {
                tracing::debug!(?delay, "Rate limited, holding requests");
                self.hold_for(delay);
            }
        }

        Ok(response)
    }
}

impl std::fmt::Debug for Throttle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle").field("interval", &self.interval).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_interval_never_waits() {
        let throttle = Throttle::new(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..50 {
            throttle.wait().await;
        }
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_clones_share_budget() {
        let throttle = Throttle::new(Duration::from_millis(50));
        let other = throttle.clone();

        let start = Instant::now();
        throttle.wait().await;
        other.wait().await;
        throttle.wait().await;

        // First permit is immediate, the next two wait one interval each.
        assert!(start.elapsed() >= Duration::from_millis(90));
    }

    #[tokio::test]
    async fn test_hold_delays_every_clone() {
        let throttle = Throttle::new(Duration::ZERO);
        let other = throttle.clone();

        throttle.hold_for(Duration::from_millis(80));
        // A shorter hold does not shorten the pending one.
        throttle.hold_for(Duration::from_millis(10));

        let start = Instant::now();
        other.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(70));
    }

    #[tokio::test]
    async fn test_hold_is_capped() {
        let throttle = Throttle::new(Duration::ZERO);
        throttle.hold_for(Duration::from_secs(86_400));

        let hold = throttle.hold_until.lock().unwrap().unwrap();
        assert!(hold <= Instant::now() + api::MAX_RETRY_AFTER);
    }
}
