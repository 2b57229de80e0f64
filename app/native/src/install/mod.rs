//! Making a rendered image the active system background.
//!
//! Installers receive the path of a fully written staged image and copy it to
//! its final location atomically, so readers of the installed file never see a
//! partial image.

mod desktop;
mod lockscreen;
#[cfg(windows)]
mod policy;

use std::path::{Path, PathBuf};

pub use desktop::DesktopInstaller;
pub use lockscreen::LockScreenInstaller;
use thiserror::Error;

/// Errors that can occur while installing a background image.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The staged image does not exist.
    #[error("Staged image not found: {}", .0.display())]
    MissingImage(PathBuf),
    /// Copying the image into place failed.
    #[error("Failed to install image to {}: {source}", target.display())]
    Copy {
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the lock screen policy failed.
    #[error("Failed to apply lock screen policy: {0}")]
    Policy(#[source] std::io::Error),
    /// The desktop wallpaper could not be changed.
    #[error("Failed to set desktop wallpaper: {0}")]
    Wallpaper(String),
}

/// Installs a staged image as a system background.
pub trait BackgroundInstaller: Send + Sync {
    /// Installs the image at `image` and returns the path of the installed copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be installed. The caller treats
    /// this as a failed cycle.
    fn install(&self, image: &Path) -> Result<PathBuf, InstallError>;
}

/// Copies `image` to `target` through a temporary file in the target directory.
fn install_copy(image: &Path, target: &Path) -> Result<(), InstallError> {
    if !image.is_file() {
        return Err(InstallError::MissingImage(image.to_path_buf()));
    }

    crate::platform::copy_atomic(image, target).map_err(|source| InstallError::Copy {
        target: target.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_copy_rejects_missing_image() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        let err = install_copy(&missing, &dir.path().join("out.png")).unwrap_err();
        assert!(matches!(err, InstallError::MissingImage(_)));
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_install_copy_creates_target() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("staged.png");
        std::fs::write(&image, b"png").unwrap();

        let target = dir.path().join("nested").join("installed.png");
        install_copy(&image, &target).unwrap();
        assert_eq!(std::fs::read(&target).unwrap(), b"png");
    }

    #[test]
    fn test_copy_error_display() {
        let err = InstallError::Copy {
            target: PathBuf::from("/locked/background.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/locked/background.png"));
        assert!(msg.contains("access denied"));
    }
}
