//! One gather, render, stage and install pass.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::constants::DEFAULT_TITLE;
use crate::install::{BackgroundInstaller, InstallError};
use crate::network::{LineFilter, NetworkInfoProvider, placeholder};
use crate::render::{Compositor, DisplayLine, RenderError, RenderedImage, format_lines};

/// Errors that fail a cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Install(#[from] InstallError),
    /// The blocking task running the cycle did not complete.
    #[error("Update cycle aborted: {0}")]
    Aborted(String),
}

/// Outcome of one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCycleResult {
    /// When the cycle finished.
    pub timestamp: DateTime<Local>,
    /// Why the cycle failed, if it did.
    pub failure: Option<String>,
    /// Installed image path on success.
    pub installed: Option<PathBuf>,
}

impl UpdateCycleResult {
    #[must_use]
    pub fn success(installed: PathBuf) -> Self {
        Self {
            timestamp: Local::now(),
            failure: None,
            installed: Some(installed),
        }
    }

    #[must_use]
    pub fn failure(err: &CycleError) -> Self {
        Self {
            timestamp: Local::now(),
            failure: Some(err.to_string()),
            installed: None,
        }
    }

    #[must_use]
    pub const fn succeeded(&self) -> bool { self.failure.is_none() }
}

/// Default location of the staged image before installation.
#[must_use]
pub fn default_staging_path() -> PathBuf {
    crate::cache::get_cache_subdir("renders").join("ip_lockscreen_bg.png")
}

/// Everything a cycle needs, from the information source to the installer.
pub struct UpdateCycle {
    provider: Box<dyn NetworkInfoProvider>,
    filter: LineFilter,
    compositor: Compositor,
    title: String,
    staging_path: PathBuf,
    installer: Box<dyn BackgroundInstaller>,
}

impl UpdateCycle {
    #[must_use]
    pub fn new(
        provider: Box<dyn NetworkInfoProvider>,
        compositor: Compositor,
        installer: Box<dyn BackgroundInstaller>,
    ) -> Self {
        Self {
            provider,
            filter: LineFilter::default(),
            compositor,
            title: DEFAULT_TITLE.to_string(),
            staging_path: default_staging_path(),
            installer,
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: LineFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_staging_path(mut self, path: PathBuf) -> Self {
        self.staging_path = path;
        self
    }

    #[must_use]
    pub fn staging_path(&self) -> &Path { &self.staging_path }

    /// Gathers network information and turns it into display lines.
    ///
    /// A failing provider never fails the cycle; its error is shown instead.
    #[must_use]
    pub fn lines(&self) -> Vec<DisplayLine> {
        let text = self.provider.gather().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to gather network information");
            placeholder(&err)
        });
        self.filter.apply(format_lines(&text))
    }

    /// Gathers and renders without touching the staged or installed image.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn render(&self) -> Result<RenderedImage, RenderError> {
        self.compositor.render(&self.title, &self.lines())
    }

    /// Runs the full cycle and returns the installed path.
    ///
    /// The image is staged with an atomic write and only then handed to the
    /// installer, so a failed render never reaches the installed file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering, staging or installation fails.
    pub fn execute(&self) -> Result<PathBuf, CycleError> {
        let image = self.render()?;
        image.write_atomic(&self.staging_path)?;
        tracing::debug!(path = %self.staging_path.display(), "background staged");
        Ok(self.installer.install(&self.staging_path)?)
    }

    /// Runs the cycle and records its outcome.
    #[must_use]
    pub fn run_once(&self) -> UpdateCycleResult {
        match self.execute() {
            Ok(installed) => UpdateCycleResult::success(installed),
            Err(err) => UpdateCycleResult::failure(&err),
        }
    }
}
