//! Reload retry backoff.
//!
//! Tracks the consecutive-failure streak for one ad surface and computes
//! capped exponential delays from [`RetryConfig`]. The surface owns the
//! actual timer, so a surface that shuts down takes its pending retry
//! with it.

use std::time::Duration;

use crate::config::RetryConfig;

/// Backoff state for one surface's load retries.
#[derive(Debug)]
pub struct RetryState {
    config: RetryConfig,
    /// Consecutive failures since the last successful load.
    failures: u32,
    /// Delay to apply to the next failure, in milliseconds.
    current_delay_ms: u64,
}

impl RetryState {
    #[must_use]
    pub fn new(config: RetryConfig) -> Self {
        let initial = config.initial_delay_ms;
        Self {
            config,
            failures: 0,
            current_delay_ms: initial,
        }
    }

    /// Record a failed load and return the delay to wait before retrying,
    /// or `None` once the attempt budget is exhausted.
    ///
    /// Advances the internal delay for the following failure.
    pub fn record_failure(&mut self) -> Option<Duration> {
        self.failures += 1;
        if let Some(max) = self.config.max_attempts {
            if self.failures > max {
                return None;
            }
        }

        let delay = Duration::from_millis(self.current_delay_ms);
        let next = (self.current_delay_ms as f64 * self.config.backoff_multiplier) as u64;
        self.current_delay_ms = next.min(self.config.max_delay_ms);
        Some(delay)
    }

    /// Clear the streak after a successful load (or a manual revival).
    pub fn reset(&mut self) {
        self.failures = 0;
        self.current_delay_ms = self.config.initial_delay_ms;
    }

    #[must_use]
    pub fn failures(&self) -> u32 {
        self.failures
    }
}
