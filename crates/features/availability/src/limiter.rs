//! Per-handle request limiter for live profile lookups.
//!
//! Two rules apply to each handle independently: a minimum spacing between requests
//! (the cooldown) and a cap on requests inside a rolling window. The check and the
//! recording of an accepted request happen under the same lock.

use fxhash::FxHashMap;
use ncraft_domain::config::RateLimitConfig;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RateLimited {
    #[error("too soon, retry in {remaining:?}")]
    Cooldown { remaining: Duration },
    #[error("window exhausted, retry in {retry_after:?}")]
    WindowExhausted { retry_after: Duration },
}

#[derive(Debug, Default)]
struct HandleState {
    last: Option<Instant>,
    requests: VecDeque<Instant>,
}

#[derive(Debug)]
pub struct RateLimiter {
    cooldown: Duration,
    window: Duration,
    max_requests: usize,
    state: Mutex<FxHashMap<String, HandleState>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(&RateLimitConfig::default())
    }
}

impl RateLimiter {
    #[must_use]
    pub fn new(policy: &RateLimitConfig) -> Self {
        Self {
            cooldown: policy.cooldown(),
            window: policy.window(),
            max_requests: policy.max_requests,
            state: Mutex::new(FxHashMap::default()),
        }
    }

    /// Admits one request for `handle` and records it, or says why not.
    ///
    /// # Errors
    /// [`RateLimited::Cooldown`] when the previous accepted request is younger than the
    /// cooldown, [`RateLimited::WindowExhausted`] when the window already holds the
    /// maximum number of requests.
    pub fn try_acquire(&self, handle: &str) -> Result<(), RateLimited> {
        let now = Instant::now();
        let mut state = self.state.lock();
        let entry = state.entry(handle.to_owned()).or_default();

        if let Some(last) = entry.last {
            let elapsed = now.saturating_duration_since(last);
            if elapsed < self.cooldown {
                return Err(RateLimited::Cooldown { remaining: self.cooldown - elapsed });
            }
        }

        while entry.requests.front().is_some_and(|t| now.saturating_duration_since(*t) >= self.window) {
            entry.requests.pop_front();
        }

        if entry.requests.len() >= self.max_requests {
            let oldest = entry.requests.front().copied().unwrap_or(now);
            let retry_after = self.window.saturating_sub(now.saturating_duration_since(oldest));
            return Err(RateLimited::WindowExhausted { retry_after });
        }

        entry.last = Some(now);
        entry.requests.push_back(now);
        Ok(())
    }

    /// Forgets everything recorded for `handle`.
    pub fn reset(&self, handle: &str) {
        self.state.lock().remove(handle);
    }

    pub fn clear(&self) {
        self.state.lock().clear();
    }

    /// Requests for `handle` still inside the window.
    #[must_use]
    pub fn in_window(&self, handle: &str) -> usize {
        let now = Instant::now();
        self.state.lock().get(handle).map_or(0, |entry| {
            entry.requests.iter().filter(|t| now.saturating_duration_since(**t) < self.window).count()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(cooldown_secs: u64, max_requests: usize) -> RateLimitConfig {
        RateLimitConfig { cooldown_secs, window_secs: 3_600, max_requests }
    }

    #[tokio::test(start_paused = true)]
    async fn second_request_inside_cooldown_is_refused() {
        let limiter = RateLimiter::default();

        assert!(limiter.try_acquire("acme").is_ok());
        tokio::time::advance(Duration::from_secs(10)).await;
        assert_eq!(
            limiter.try_acquire("acme"),
            Err(RateLimited::Cooldown { remaining: Duration::from_secs(26) })
        );

        tokio::time::advance(Duration::from_secs(26)).await;
        assert!(limiter.try_acquire("acme").is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn handles_are_independent() {
        let limiter = RateLimiter::default();

        assert!(limiter.try_acquire("acme").is_ok());
        assert!(limiter.try_acquire("nova").is_ok());
        assert!(limiter.try_acquire("acme").is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn window_caps_requests_regardless_of_cooldown() {
        let limiter = RateLimiter::new(&policy(0, 100));

        for _ in 0..100 {
            assert!(limiter.try_acquire("acme").is_ok());
            tokio::time::advance(Duration::from_secs(1)).await;
        }

        let refused = limiter.try_acquire("acme");
        assert_eq!(
            refused,
            Err(RateLimited::WindowExhausted { retry_after: Duration::from_secs(3_500) })
        );
        assert_eq!(limiter.in_window("acme"), 100);
    }

    #[tokio::test(start_paused = true)]
    async fn old_requests_leave_the_window() {
        let limiter = RateLimiter::new(&policy(0, 2));

        assert!(limiter.try_acquire("acme").is_ok());
        tokio::time::advance(Duration::from_secs(1_800)).await;
        assert!(limiter.try_acquire("acme").is_ok());
        assert!(limiter.try_acquire("acme").is_err());

        tokio::time::advance(Duration::from_secs(1_800)).await;
        assert!(limiter.try_acquire("acme").is_ok());
        assert_eq!(limiter.in_window("acme"), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_and_clear() {
        let limiter = RateLimiter::default();

        assert!(limiter.try_acquire("acme").is_ok());
        assert!(limiter.try_acquire("nova").is_ok());

        limiter.reset("acme");
        assert!(limiter.try_acquire("acme").is_ok());
        assert!(limiter.try_acquire("nova").is_err());

        limiter.clear();
        assert!(limiter.try_acquire("nova").is_ok());
        assert_eq!(limiter.in_window("ghost"), 0);
    }

    #[test]
    fn zero_capacity_refuses_everything() {
        let limiter = RateLimiter::new(&policy(0, 0));
        assert!(matches!(limiter.try_acquire("acme"), Err(RateLimited::WindowExhausted { .. })));
    }
}
