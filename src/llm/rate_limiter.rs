use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant, sleep};
use reqwest::Response;

const WINDOW: Duration = Duration::from_secs(60);

/// Soft client-side throttle for classification requests.
pub struct RateLimiter {
    requests_per_minute: Option<u32>,
    state: Arc<Mutex<RateLimitState>>,
}

struct RateLimitState {
    requests_this_minute: u32,
    minute_start: Instant,
}

impl RateLimiter {
    /// `None` or `Some(0)` disables throttling.
    pub fn new(requests_per_minute: Option<u32>) -> Self {
        Self {
            requests_per_minute: requests_per_minute.filter(|n| *n > 0),
            state: Arc::new(Mutex::new(RateLimitState {
                requests_this_minute: 0,
                minute_start: Instant::now(),
            })),
        }
    }

    pub fn unlimited() -> Self {
        Self::new(None)
    }

    pub async fn wait(&self) {
        let Some(limit) = self.requests_per_minute else {
            return;
        };

        let mut state = self.state.lock().await;

        let minute_elapsed = state.minute_start.elapsed();
        if minute_elapsed < WINDOW {
            if state.requests_this_minute >= limit {
                let wait_time = WINDOW - minute_elapsed;
                tracing::debug!("Soft rate limiting, waiting {:?}", wait_time);
                sleep(wait_time).await;
                state.requests_this_minute = 0;
                state.minute_start = Instant::now();
            }
        } else {
            state.requests_this_minute = 0;
            state.minute_start = Instant::now();
        }

        state.requests_this_minute += 1;
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::unlimited()
    }
}

/// Seconds from a `Retry-After` header, defaulting to a minute.
pub fn retry_after_secs(response: &Response) -> u64 {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_unlimited_never_waits() {
        let limiter = RateLimiter::unlimited();
        let start = Instant::now();
        for _ in 0..100 {
            limiter.wait().await;
        }
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_next_window() {
        let limiter = RateLimiter::new(Some(2));
        let start = Instant::now();
        limiter.wait().await;
        limiter.wait().await;
        assert!(start.elapsed() < Duration::from_secs(1));

        limiter.wait().await;
        assert!(start.elapsed() >= WINDOW);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_disables() {
        let limiter = RateLimiter::new(Some(0));
        let start = Instant::now();
        limiter.wait().await;
        limiter.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
