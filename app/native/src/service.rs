//! Turns a loaded configuration into a running service or a one-shot render.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tokio_util::sync::CancellationToken;

use crate::config::NetlockConfig;
use crate::error::NetlockError;
use crate::render::Compositor;
use crate::scheduler::{Intervals, SchedulerReport, UpdateCycle, UpdateScheduler};

/// Command-line overrides for the schedule, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleOverrides {
    pub interval: Option<u64>,
    pub retry_interval: Option<u64>,
}

impl ScheduleOverrides {
    /// Applies the overrides on top of the configured schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting schedule is invalid.
    pub fn apply(self, config: &NetlockConfig) -> Result<Intervals, NetlockError> {
        let mut schedule = config.schedule.clone();
        if let Some(interval) = self.interval {
            schedule.interval = interval;
        }
        if let Some(retry_interval) = self.retry_interval {
            schedule.retry_interval = retry_interval;
        }
        Ok(schedule.to_intervals()?)
    }
}

/// Builds the update cycle described by `config`.
///
/// Paths in the configuration are resolved against `base_dir`.
///
/// # Errors
///
/// Returns an error if the canvas configuration is invalid. This is fatal: a
/// bad canvas cannot be fixed by retrying.
pub fn build_cycle(config: &NetlockConfig, base_dir: &Path) -> Result<UpdateCycle, NetlockError> {
    let compositor = Compositor::new(config.canvas.to_spec()?)?;

    let cycle = UpdateCycle::new(
        Box::new(config.source.provider()),
        compositor,
        config.installer.installer(base_dir),
    )
    .with_filter(config.source.filter())
    .with_title(config.title.clone());

    Ok(match config.installer.resolved_staging_path(base_dir) {
        Some(staging_path) => cycle.with_staging_path(staging_path),
        None => cycle,
    })
}

/// Runs the update loop until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the runtime cannot be
/// started. Failures inside cycles are logged and retried, never returned.
pub fn run_service(
    config: &NetlockConfig,
    base_dir: &Path,
    overrides: ScheduleOverrides,
) -> Result<SchedulerReport, NetlockError> {
    let intervals = overrides.apply(config)?;
    let cycle = build_cycle(config, base_dir)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| NetlockError::RuntimeError(err.to_string()))?;

    let report = runtime.block_on(async move {
        let cancel = CancellationToken::new();
        let shutdown = cancel.clone();

        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("shutdown requested");
                    shutdown.cancel();
                }
                Err(err) => tracing::warn!(error = %err, "failed to listen for ctrl-c"),
            }
        });

        UpdateScheduler::new(cycle, intervals).run(cancel).await
    });

    Ok(report)
}

/// Name of a one-shot render taken at `at`.
#[must_use]
pub fn test_output_name(at: DateTime<Local>) -> String {
    format!("ip_background_test_{}.png", at.format("%Y%m%d_%H%M%S"))
}

/// Default output path for a one-shot render: the desktop, or the current
/// directory if there is none.
#[must_use]
pub fn default_test_output(at: DateTime<Local>) -> PathBuf {
    dirs::desktop_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default()
        .join(test_output_name(at))
}

/// Renders once to `output` without installing anything.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the image cannot be
/// written.
pub fn render_once(config: &NetlockConfig, base_dir: &Path, output: &Path) -> Result<(), NetlockError> {
    let cycle = build_cycle(config, base_dir)?;
    let started = std::time::Instant::now();

    let image = cycle.render()?;
    image.write_atomic(output)?;

    tracing::info!(
        path = %output.display(),
        width = image.width(),
        height = image.height(),
        elapsed_ms = started.elapsed().as_millis(),
        "test image rendered"
    );
    Ok(())
}
