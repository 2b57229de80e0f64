//! Configuration types and loading.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::parse_hex_color;
use crate::constants::{APP_NAME, DEFAULT_TITLE};
use crate::install::{BackgroundInstaller, DesktopInstaller, LockScreenInstaller};
use crate::network::{
    AdapterProvider, CommandProvider, DEFAULT_FILTER_LIMIT, LineFilter, NetworkInfoProvider,
    SystemProvider,
};
use crate::platform::expand_and_resolve;
use crate::render::{CanvasSpec, Palette};
use crate::scheduler::Intervals;

/// Canvas colors as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorsConfig {
    /// Gradient color at the top of the canvas.
    /// Default: "#141E32"
    pub gradient_top: String,

    /// Gradient color at the bottom of the canvas.
    /// Default: "#283C5A"
    pub gradient_bottom: String,

    /// Color of the two decorative circles.
    /// Default: "#78C8FF"
    pub accent: String,

    /// Opacity of the decorative circles (0-255).
    /// Default: 100
    pub accent_opacity: u8,

    /// Text color.
    /// Default: "#FFFFFF"
    pub text: String,

    /// Text shadow color.
    /// Default: "#000000"
    pub shadow: String,

    /// Opacity of the text shadow (0-255).
    /// Default: 128
    pub shadow_opacity: u8,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            gradient_top: "#141E32".to_string(),
            gradient_bottom: "#283C5A".to_string(),
            accent: "#78C8FF".to_string(),
            accent_opacity: 100,
            text: "#FFFFFF".to_string(),
            shadow: "#000000".to_string(),
            shadow_opacity: 128,
        }
    }
}

impl ColorsConfig {
    /// Parses the colors into a palette.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a color is not a valid hex string.
    pub fn to_palette(&self) -> Result<Palette, ConfigError> {
        let parse = |value: &str| parse_hex_color(value).map_err(ConfigError::Invalid);

        Ok(Palette {
            gradient_top: parse(&self.gradient_top)?,
            gradient_bottom: parse(&self.gradient_bottom)?,
            accent: parse(&self.accent)?,
            accent_opacity: self.accent_opacity,
            text: parse(&self.text)?,
            shadow: parse(&self.shadow)?,
            shadow_opacity: self.shadow_opacity,
        })
    }
}

/// Canvas geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Image width in pixels. Default: 1920
    pub width: u32,

    /// Image height in pixels. Default: 1080
    pub height: u32,

    /// X of the title and of the first text column. Default: 50
    pub margin_left: i32,

    /// Y of the title. Default: 50
    pub title_top: i32,

    /// Y where the text columns start. Default: 100
    pub body_top: i32,

    /// Vertical distance between text lines. Default: 18
    pub line_pitch: u32,

    /// Offset of the second column from the horizontal center. Default: 20
    pub column_gutter: i32,

    /// Empty band kept at the bottom of the canvas. Default: 100
    pub bottom_margin: u32,

    /// Maximum number of lines to lay out (unset = as many as fit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<usize>,

    /// Canvas colors.
    pub colors: ColorsConfig,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        let spec = CanvasSpec::default();
        Self {
            width: spec.width,
            height: spec.height,
            margin_left: spec.margin_left,
            title_top: spec.title_top,
            body_top: spec.body_top,
            line_pitch: spec.line_pitch,
            column_gutter: spec.column_gutter,
            bottom_margin: spec.bottom_margin,
            max_lines: spec.max_lines,
            colors: ColorsConfig::default(),
        }
    }
}

impl CanvasConfig {
    /// Builds and validates the canvas spec.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for bad colors or geometry that cannot
    /// be drawn.
    pub fn to_spec(&self) -> Result<CanvasSpec, ConfigError> {
        let spec = CanvasSpec {
            width: self.width,
            height: self.height,
            margin_left: self.margin_left,
            title_top: self.title_top,
            body_top: self.body_top,
            line_pitch: self.line_pitch,
            column_gutter: self.column_gutter,
            bottom_margin: self.bottom_margin,
            max_lines: self.max_lines,
            palette: self.colors.to_palette()?,
        };
        spec.validate().map_err(|err| ConfigError::Invalid(err.to_string()))?;
        Ok(spec)
    }
}

/// Refresh timing, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleConfig {
    /// Seconds between refreshes. Default: 300
    pub interval: u64,

    /// Seconds before retrying after a failed refresh. Default: 60
    pub retry_interval: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let intervals = Intervals::default();
        Self {
            interval: intervals.interval.as_secs(),
            retry_interval: intervals.retry.as_secs(),
        }
    }
}

impl ScheduleConfig {
    /// Converts to scheduler intervals.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if an interval is zero.
    pub fn to_intervals(&self) -> Result<Intervals, ConfigError> {
        if self.interval == 0 || self.retry_interval == 0 {
            return Err(ConfigError::Invalid(
                "schedule intervals must be at least one second".to_string(),
            ));
        }
        Ok(Intervals::new(
            Duration::from_secs(self.interval),
            Duration::from_secs(self.retry_interval),
        ))
    }
}

/// When the structured adapter summary is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum AdapterMode {
    /// Always append the adapter summary.
    Always,
    /// Only when the command fails. This is the default.
    #[default]
    Fallback,
    /// Never.
    Never,
}

/// Where the network information comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceConfig {
    /// Command to run, as `[program, args...]`.
    /// Unset uses the platform default (`ipconfig /all`, `ifconfig`, `ip addr`).
    /// An empty list disables the command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,

    /// When to show the adapter summary.
    pub adapters: AdapterMode,

    /// Include loopback adapters in the summary. Default: false
    pub include_loopback: bool,

    /// Only show lines containing one of these keywords (empty = show all).
    pub keywords: Vec<String>,

    /// Maximum number of lines kept by the keyword filter. Default: 30
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_limit: Option<usize>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            command: None,
            adapters: AdapterMode::default(),
            include_loopback: false,
            keywords: Vec::new(),
            keyword_limit: Some(DEFAULT_FILTER_LIMIT),
        }
    }
}

impl SourceConfig {
    /// Builds the provider described by this section.
    #[must_use]
    pub fn provider(&self) -> SystemProvider {
        let command = match &self.command {
            None => Some(CommandProvider::platform_default()),
            Some(command_line) => CommandProvider::from_command_line(command_line),
        };

        let mut sources: Vec<Box<dyn NetworkInfoProvider>> = Vec::new();
        if let Some(command) = command {
            sources.push(Box::new(command));
        }

        let adapters = AdapterProvider { include_loopback: self.include_loopback };
        match self.adapters {
            AdapterMode::Always => {
                sources.push(Box::new(adapters));
                SystemProvider::new(sources)
            }
            AdapterMode::Fallback => SystemProvider::new(sources).with_fallback(Box::new(adapters)),
            AdapterMode::Never => SystemProvider::new(sources),
        }
    }

    #[must_use]
    pub fn filter(&self) -> LineFilter { LineFilter::new(self.keywords.iter().cloned(), self.keyword_limit) }
}

/// Which background is replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum InstallTarget {
    /// The lock screen background. This is the default.
    #[default]
    LockScreen,
    /// The desktop wallpaper.
    Desktop,
}

/// How the rendered image is installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct InstallerConfig {
    /// Background to replace.
    pub target: InstallTarget,

    /// Installed image path. Unset uses the platform default for the target.
    /// Supports `~`; relative paths are resolved against the config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Where the image is rendered before installing it.
    /// Unset uses the cache directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staging_path: Option<String>,

    /// On Windows, also write the lock screen policy to the registry.
    /// Requires administrator rights. Default: true
    pub apply_policy: bool,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            target: InstallTarget::default(),
            path: None,
            staging_path: None,
            apply_policy: true,
        }
    }
}

impl InstallerConfig {
    /// Resolves the configured install path, if any.
    #[must_use]
    pub fn resolved_path(&self, base_dir: &Path) -> Option<PathBuf> {
        resolve_optional(self.path.as_deref(), base_dir)
    }

    /// Resolves the configured staging path, if any.
    #[must_use]
    pub fn resolved_staging_path(&self, base_dir: &Path) -> Option<PathBuf> {
        resolve_optional(self.staging_path.as_deref(), base_dir)
    }

    /// Builds the installer described by this section.
    #[must_use]
    pub fn installer(&self, base_dir: &Path) -> Box<dyn BackgroundInstaller> {
        let path = self.resolved_path(base_dir);
        match self.target {
            InstallTarget::LockScreen => Box::new(LockScreenInstaller::new(
                path.unwrap_or_else(LockScreenInstaller::default_target),
                self.apply_policy,
            )),
            InstallTarget::Desktop => Box::new(DesktopInstaller::new(
                path.unwrap_or_else(DesktopInstaller::default_target),
            )),
        }
    }
}

fn resolve_optional(path: Option<&str>, base_dir: &Path) -> Option<PathBuf> {
    path.map(|path| expand_and_resolve(path, base_dir))
        .filter(|path| !path.as_os_str().is_empty())
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct NetlockConfig {
    /// Title drawn above the network information.
    /// Default: "Network Configuration"
    pub title: String,

    /// Canvas size, layout and colors.
    pub canvas: CanvasConfig,

    /// Refresh timing.
    pub schedule: ScheduleConfig,

    /// Network information source and line filter.
    pub source: SourceConfig,

    /// Background installation.
    pub installer: InstallerConfig,
}

impl Default for NetlockConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            canvas: CanvasConfig::default(),
            schedule: ScheduleConfig::default(),
            source: SourceConfig::default(),
            installer: InstallerConfig::default(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error("No configuration file found. Run `netlock config init` to create one.")]
    NotFound,
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
    /// The configuration parsed but describes something unusable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Legacy configuration file names in home directory.
const LEGACY_CONFIG_FILE_NAMES: &[&str] = &[".netlock.jsonc", ".netlock.json"];

/// Returns the possible configuration file paths in priority order.
///
/// 1. `$XDG_CONFIG_HOME/netlock/` if set
/// 2. `~/.config/netlock/`
/// 3. the platform config directory (`%APPDATA%\netlock\`, `~/Library/Application Support/netlock/`)
/// 4. `~/.netlock.jsonc` or `~/.netlock.json`
///
/// Each directory is checked for `config.jsonc` then `config.json`.
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut dirs_to_search = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        dirs_to_search.push(PathBuf::from(xdg_config).join(APP_NAME));
    }
    if let Some(home) = dirs::home_dir() {
        dirs_to_search.push(home.join(".config").join(APP_NAME));
    }
    if let Some(config_dir) = dirs::config_dir() {
        dirs_to_search.push(config_dir.join(APP_NAME));
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for dir in dirs_to_search {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            // XDG_CONFIG_HOME is often ~/.config.
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    if let Some(home) = dirs::home_dir() {
        paths.extend(LEGACY_CONFIG_FILE_NAMES.iter().map(|filename| home.join(filename)));
    }

    paths
}

/// Loads the configuration from the first existing file in [`config_paths`].
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of the expected locations.
/// Returns `ConfigError::IoError` if a configuration file exists but could not be read.
/// Returns `ConfigError::ParseError` if the configuration file contains invalid JSON.
pub fn load_config() -> Result<(NetlockConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), |path| load_config_from_path(&path))
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist, and the same
/// errors as [`load_config`] otherwise.
pub fn load_config_from_path(path: &Path) -> Result<(NetlockConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    // Strip comments from JSONC before parsing
    let reader = json_comments::StripComments::new(file);
    let config: NetlockConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}
