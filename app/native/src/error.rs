//! Error types for netlock.
//!
//! Each module has its own error enum; this one collects them for the CLI.

use thiserror::Error;

use crate::config::ConfigError;
use crate::install::InstallError;
use crate::render::RenderError;
use crate::scheduler::CycleError;

/// Errors that can occur during application execution.
#[derive(Debug, Error)]
pub enum NetlockError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
    /// Rendering failed.
    #[error("Render error: {0}")]
    RenderError(#[from] RenderError),
    /// Installing the background failed.
    #[error("Install error: {0}")]
    InstallError(#[from] InstallError),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// The async runtime could not be started.
    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

impl From<CycleError> for NetlockError {
    fn from(err: CycleError) -> Self {
        match err {
            CycleError::Render(err) => Self::RenderError(err),
            CycleError::Install(err) => Self::InstallError(err),
            CycleError::Aborted(msg) => Self::RuntimeError(msg),
        }
    }
}

impl From<String> for NetlockError {
    fn from(msg: String) -> Self { Self::InvalidArguments(msg) }
}

impl From<&str> for NetlockError {
    fn from(msg: &str) -> Self { Self::InvalidArguments(msg.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arguments_display() {
        let err = NetlockError::InvalidArguments("--interval must be positive".to_string());
        assert_eq!(err.to_string(), "--interval must be positive");
    }

    #[test]
    fn test_config_error_display() {
        let err: NetlockError = ConfigError::Invalid("Invalid hex color: white".to_string()).into();
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("white"));
    }

    #[test]
    fn test_render_error_from_conversion() {
        let err: NetlockError = RenderError::InvalidCanvas("width is zero".to_string()).into();
        assert!(matches!(err, NetlockError::RenderError(_)));
        assert!(err.to_string().contains("width is zero"));
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err: NetlockError = io_err.into();
        assert!(matches!(err, NetlockError::IoError(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_cycle_error_keeps_install_cause() {
        let cycle = CycleError::Install(InstallError::Wallpaper("no desktop session".to_string()));
        let err: NetlockError = cycle.into();
        assert!(matches!(err, NetlockError::InstallError(_)));
        assert!(err.to_string().contains("no desktop session"));
    }

    #[test]
    fn test_from_string() {
        let err: NetlockError = "test error".into();
        assert!(matches!(err, NetlockError::InvalidArguments(_)));
    }
}
