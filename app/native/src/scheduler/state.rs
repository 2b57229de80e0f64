//! Scheduler states and their sleep intervals.

use std::time::Duration;

/// Delay after a successful cycle.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Delay after a failed cycle before retrying.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(60);

/// Sleep intervals between cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intervals {
    /// Normal refresh interval.
    pub interval: Duration,
    /// Shorter interval used after a failure.
    pub retry: Duration,
}

impl Intervals {
    #[must_use]
    pub const fn new(interval: Duration, retry: Duration) -> Self { Self { interval, retry } }
}

impl Default for Intervals {
    fn default() -> Self { Self::new(DEFAULT_INTERVAL, DEFAULT_RETRY_INTERVAL) }
}

/// Where the scheduler stands after a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// The last cycle succeeded.
    Running,
    /// The last cycle failed; the next one runs after the retry interval.
    Backoff,
}

impl SchedulerState {
    /// State entered once a cycle finishes.
    #[must_use]
    pub const fn after_cycle(succeeded: bool) -> Self {
        if succeeded { Self::Running } else { Self::Backoff }
    }

    /// How long to sleep in this state before the next cycle.
    #[must_use]
    pub const fn delay(self, intervals: &Intervals) -> Duration {
        match self {
            Self::Running => intervals.interval,
            Self::Backoff => intervals.retry,
        }
    }
}
