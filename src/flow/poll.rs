//! Polling policies for provider status confirmation.

use std::time::Duration;

/// Drives the status-polling loop in `complete_recharge`.
///
/// `attempt` is the number of status checks that have already come back
/// PENDING. Returning `None` ends the loop with a TIMEOUT outcome.
pub trait PollPolicy: Send + Sync {
    /// Delay between the provider recharge call and the first status check.
    fn initial_delay(&self) -> Duration;

    /// Delay before the next status check, or `None` to stop polling.
    fn next_delay(&self, attempt: u32) -> Option<Duration>;
}

/// Fixed-interval polling with a bounded attempt count.
#[derive(Debug, Clone)]
pub struct FixedPoll {
    pub initial_delay: Duration,
    pub interval: Duration,
    /// Total number of status checks before giving up.
    pub max_attempts: u32,
}

impl Default for FixedPoll {
    /// Production defaults: 5s settle time, then 30s between checks, 3 checks.
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(5),
            interval: Duration::from_secs(30),
            max_attempts: 3,
        }
    }
}

impl FixedPoll {
    /// Zero-delay policy so tests don't sit through 95 seconds of timers.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            initial_delay: Duration::ZERO,
            interval: Duration::ZERO,
            max_attempts,
        }
    }
}

impl PollPolicy for FixedPoll {
    fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    fn next_delay(&self, attempt: u32) -> Option<Duration> {
        if attempt < self.max_attempts {
            Some(self.interval)
        } else {
            None
        }
    }
}
