//! Periodic background refresh.
//!
//! The scheduler runs one [`UpdateCycle`] at a time, forever, until it is
//! cancelled. A successful cycle is followed by the normal interval, a failed
//! one by the shorter retry interval. Failures are logged and never stop the
//! loop.
//!
//! Cycles run on the blocking pool so rendering never stalls the runtime.
//! Cancellation interrupts a sleep immediately but lets a running cycle finish,
//! so an install is either complete or never started.

mod cycle;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

pub use cycle::{CycleError, UpdateCycle, UpdateCycleResult, default_staging_path};
pub use state::{DEFAULT_INTERVAL, DEFAULT_RETRY_INTERVAL, Intervals, SchedulerState};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

/// Summary returned when the scheduler stops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulerReport {
    /// Cycles attempted.
    pub cycles: u64,
    /// Cycles that failed.
    pub failures: u64,
    /// Last successfully installed image.
    pub last_installed: Option<PathBuf>,
}

/// Drives update cycles on a timer.
pub struct UpdateScheduler {
    cycle: Arc<UpdateCycle>,
    intervals: Intervals,
    events: Option<UnboundedSender<UpdateCycleResult>>,
    last_installed: Option<PathBuf>,
}

impl UpdateScheduler {
    #[must_use]
    pub fn new(cycle: UpdateCycle, intervals: Intervals) -> Self {
        Self {
            cycle: Arc::new(cycle),
            intervals,
            events: None,
            last_installed: None,
        }
    }

    /// Sends every cycle result to `events`.
    #[must_use]
    pub fn with_events(mut self, events: UnboundedSender<UpdateCycleResult>) -> Self {
        self.events = Some(events);
        self
    }

    /// Runs cycles until `cancel` fires. The first cycle starts immediately.
    pub async fn run(mut self, cancel: CancellationToken) -> SchedulerReport {
        let mut report = SchedulerReport::default();

        tracing::info!(
            interval_secs = self.intervals.interval.as_secs(),
            retry_secs = self.intervals.retry.as_secs(),
            "update scheduler started"
        );

        while !cancel.is_cancelled() {
            let result = self.run_cycle().await;
            report.cycles += 1;

            let state = SchedulerState::after_cycle(result.succeeded());
            match (&result.failure, &result.installed) {
                (Some(reason), _) => {
                    report.failures += 1;
                    tracing::error!(error = %reason, "update cycle failed");
                }
                (None, Some(path)) => {
                    tracing::info!(path = %path.display(), "background updated");
                    self.last_installed = Some(path.clone());
                }
                (None, None) => {}
            }

            if let Some(events) = &self.events {
                // Observers may go away; the loop keeps running without them.
                let _ = events.send(result);
            }

            let delay = state.delay(&self.intervals);
            tracing::debug!(?state, delay_secs = delay.as_secs_f64(), "waiting for next cycle");

            tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                () = tokio::time::sleep(delay) => {}
            }
        }

        report.last_installed = self.last_installed;
        tracing::info!(cycles = report.cycles, failures = report.failures, "update scheduler stopped");
        report
    }

    async fn run_cycle(&self) -> UpdateCycleResult {
        let cycle = Arc::clone(&self.cycle);
        match tokio::task::spawn_blocking(move || cycle.run_once()).await {
            Ok(result) => result,
            Err(err) => UpdateCycleResult::failure(&CycleError::Aborted(err.to_string())),
        }
    }
}
