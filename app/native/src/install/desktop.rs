//! Desktop wallpaper installer.

use std::path::{Path, PathBuf};

use super::{BackgroundInstaller, InstallError, install_copy};

/// Copies the image into place and makes it the desktop wallpaper.
///
/// Useful where the lock screen cannot be changed by an unprivileged process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopInstaller {
    target: PathBuf,
}

impl DesktopInstaller {
    #[must_use]
    pub const fn new(target: PathBuf) -> Self { Self { target } }

    #[must_use]
    pub fn default_target() -> PathBuf {
        crate::cache::get_cache_subdir("desktop").join("background.png")
    }

    #[must_use]
    pub fn target(&self) -> &Path { &self.target }
}

impl Default for DesktopInstaller {
    fn default() -> Self { Self::new(Self::default_target()) }
}

impl BackgroundInstaller for DesktopInstaller {
    fn install(&self, image: &Path) -> Result<PathBuf, InstallError> {
        install_copy(image, &self.target)?;

        let path = self.target.to_string_lossy();
        wallpaper::set_from_path(&path).map_err(|err| InstallError::Wallpaper(err.to_string()))?;

        tracing::info!(target = %self.target.display(), "desktop wallpaper installed");
        Ok(self.target.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target_is_in_cache() {
        let target = DesktopInstaller::default_target();
        assert!(target.to_string_lossy().contains("desktop"));
    }

    #[test]
    fn test_default_installer_uses_default_target() {
        assert_eq!(DesktopInstaller::default().target(), DesktopInstaller::default_target());
    }

    #[test]
    fn test_missing_image_fails_before_wallpaper_change() {
        let dir = tempfile::tempdir().unwrap();
        let installer = DesktopInstaller::new(dir.path().join("background.png"));
        let err = installer.install(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, InstallError::MissingImage(_)));
    }
}
