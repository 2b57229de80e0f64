//! Configuration module for netlock.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.
//! Every option has a default, so a missing file is not an error.

pub mod color;
pub mod schema;
pub mod template;
pub mod types;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub use color::parse_hex_color;
pub use types::{
    AdapterMode, CanvasConfig, ColorsConfig, ConfigError, InstallTarget, InstallerConfig,
    NetlockConfig, ScheduleConfig, SourceConfig, config_paths, load_config as load_config_default,
    load_config_from_path,
};

/// Global configuration instance, loaded once at startup.
static CONFIG: OnceLock<NetlockConfig> = OnceLock::new();

/// Path to the currently loaded configuration file.
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Custom config path override (set via CLI --config flag).
static CUSTOM_CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Sets a custom configuration file path to use instead of the default search paths.
///
/// This must be called before `init()` or `get_config()` to take effect.
/// Returns `false` if a path was already set.
pub fn set_custom_config_path(path: PathBuf) -> bool { CUSTOM_CONFIG_PATH.set(path).is_ok() }

/// Loads the configuration from the custom path or the default search paths.
///
/// # Errors
///
/// Returns the underlying [`ConfigError`], including `NotFound` when no file
/// exists.
pub fn load() -> Result<(NetlockConfig, PathBuf), ConfigError> {
    CUSTOM_CONFIG_PATH
        .get()
        .map_or_else(load_config_default, |path| load_config_from_path(path))
}

/// Loads the configuration from disk, falling back to defaults.
fn load_or_default() -> NetlockConfig {
    match load() {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "configuration loaded");
            let _ = CONFIG_PATH.set(path);
            config
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file found, using defaults");
            NetlockConfig::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            NetlockConfig::default()
        }
    }
}

/// Creates a template configuration file at the preferred location if none exists.
///
/// Called by the service on first start so the options are discoverable.
pub fn create_default_config_file() {
    if CUSTOM_CONFIG_PATH.get().is_some() || CONFIG_PATH.get().is_some() {
        return;
    }

    let Some(config_path) = config_paths().into_iter().next() else {
        tracing::debug!("no config path available for creating template");
        return;
    };

    if config_path.exists() {
        return;
    }

    match template::create_config_file(&config_path) {
        Ok(()) => {
            tracing::info!(path = %config_path.display(), "created default configuration file");
        }
        Err(err) => {
            tracing::debug!(
                error = %err,
                path = %config_path.display(),
                "failed to create default configuration file"
            );
        }
    }
}

/// Initializes and returns the global configuration instance.
///
/// This function is idempotent - calling it multiple times will return
/// the same configuration instance.
pub fn init() -> &'static NetlockConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the global configuration instance, initializing it if necessary.
pub fn get_config() -> &'static NetlockConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the path to the loaded configuration file, if any.
pub fn get_config_path() -> Option<&'static PathBuf> { CONFIG_PATH.get() }

/// Directory that relative paths in the configuration are resolved against.
///
/// This is the directory of the loaded file, or the current directory when
/// running on defaults.
#[must_use]
pub fn base_dir() -> PathBuf {
    get_config_path()
        .and_then(|path| path.parent())
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default()
}
