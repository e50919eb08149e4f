//! Client-side request throttling.
//!
//! The YNAB API allows 200 requests per hour; this tool additionally keeps a
//! per-minute budget so a burst of runs cannot front-load the hourly
//! allowance. The throttle is a sliding window over recorded request times:
//! before each request, [`Throttle::acquire`] sleeps just long enough for
//! the oldest in-window request to age out.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::RateLimit;

const MINUTE: Duration = Duration::from_secs(60);
const HOUR: Duration = Duration::from_secs(3600);

/// Sliding-window rate limiter for outbound API requests.
#[derive(Debug)]
pub struct Throttle {
    limits: RateLimit,
    sent: VecDeque<Instant>,
}

impl Throttle {
    /// Creates a throttle enforcing the given limits.
    pub fn new(limits: RateLimit) -> Self {
        Self {
            limits,
            sent: VecDeque::new(),
        }
    }

    /// Waits until a request may be sent, then records it.
    pub async fn acquire(&mut self) {
        let now = Instant::now();
        if let Some(delay) = self.delay_until_slot(now) {
            debug!(delay_ms = delay.as_millis() as u64, "Rate limit reached, waiting");
            tokio::time::sleep(delay).await;
        }
        self.record(Instant::now());
    }

    /// Returns how long to wait before the next request fits both windows,
    /// or `None` if it may be sent immediately.
    pub fn delay_until_slot(&self, now: Instant) -> Option<Duration> {
        let minute_delay = self.window_delay(now, MINUTE, self.limits.requests_per_minute);
        let hour_delay = self.window_delay(now, HOUR, self.limits.requests_per_hour);
        match (minute_delay, hour_delay) {
            (None, None) => None,
            (a, b) => Some(a.unwrap_or_default().max(b.unwrap_or_default())),
        }
    }

    /// Records a sent request and drops entries older than the hour window.
    pub fn record(&mut self, at: Instant) {
        self.sent.push_back(at);
        while let Some(&front) = self.sent.front() {
            if at.duration_since(front) > HOUR {
                self.sent.pop_front();
            } else {
                break;
            }
        }
    }

    fn window_delay(&self, now: Instant, window: Duration, limit: u32) -> Option<Duration> {
        let in_window: Vec<Instant> = self
            .sent
            .iter()
            .copied()
            .filter(|&t| now.duration_since(t) < window)
            .collect();

        if (in_window.len() as u32) < limit {
            return None;
        }

        // The slot opens when the oldest in-window request ages out.
        let oldest = *in_window.first()?;
        Some(window.saturating_sub(now.duration_since(oldest)))
    }
}
