//! Lock screen background installer.

use std::path::{Path, PathBuf};

use super::{BackgroundInstaller, InstallError, install_copy};

/// Copies the image to the lock screen background location.
///
/// On Windows the installer can also write the personalization policy that
/// points the lock screen at the installed file and stops users from changing
/// it. Writing the policy requires administrator rights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockScreenInstaller {
    target: PathBuf,
    apply_policy: bool,
}

impl LockScreenInstaller {
    #[must_use]
    pub const fn new(target: PathBuf, apply_policy: bool) -> Self { Self { target, apply_policy } }

    /// Where the lock screen image lives when no target is configured.
    #[cfg(windows)]
    #[must_use]
    pub fn default_target() -> PathBuf {
        let windir = std::env::var_os("WINDIR").unwrap_or_else(|| "C:\\Windows".into());
        PathBuf::from(windir)
            .join("System32")
            .join("oobe")
            .join("info")
            .join("backgrounds")
            .join("backgroundDefault.jpg")
    }

    /// Where the lock screen image lives when no target is configured.
    #[cfg(not(windows))]
    #[must_use]
    pub fn default_target() -> PathBuf {
        crate::cache::get_cache_subdir("lockscreen").join("background.png")
    }

    #[must_use]
    pub fn target(&self) -> &Path { &self.target }

    #[must_use]
    pub const fn applies_policy(&self) -> bool { self.apply_policy }
}

impl Default for LockScreenInstaller {
    fn default() -> Self { Self::new(Self::default_target(), cfg!(windows)) }
}

impl BackgroundInstaller for LockScreenInstaller {
    fn install(&self, image: &Path) -> Result<PathBuf, InstallError> {
        install_copy(image, &self.target)?;

        if self.apply_policy {
            #[cfg(windows)]
            super::policy::apply_lock_screen_policy(&self.target).map_err(InstallError::Policy)?;

            #[cfg(not(windows))]
            tracing::debug!("lock screen policy is only supported on windows");
        }

        tracing::info!(target = %self.target.display(), "lock screen background installed");
        Ok(self.target.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target_is_absolute_file() {
        let target = LockScreenInstaller::default_target();
        assert!(target.file_name().is_some());
        assert!(target.extension().is_some());
    }

    #[test]
    fn test_default_installer_uses_default_target() {
        let installer = LockScreenInstaller::default();
        assert_eq!(installer.target(), LockScreenInstaller::default_target());
        assert_eq!(installer.applies_policy(), cfg!(windows));
    }

    #[test]
    fn test_install_copies_to_target() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("staged.png");
        std::fs::write(&image, b"first").unwrap();

        let target = dir.path().join("lockscreen").join("background.png");
        let installer = LockScreenInstaller::new(target.clone(), false);

        assert_eq!(installer.install(&image).unwrap(), target);
        assert_eq!(std::fs::read(&target).unwrap(), b"first");

        std::fs::write(&image, b"second").unwrap();
        installer.install(&image).unwrap();
        assert_eq!(std::fs::read(&target).unwrap(), b"second");
    }

    #[test]
    fn test_install_missing_image_leaves_target_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("background.png");
        std::fs::write(&target, b"previous").unwrap();

        let installer = LockScreenInstaller::new(target.clone(), false);
        assert!(installer.install(&dir.path().join("missing.png")).is_err());
        assert_eq!(std::fs::read(&target).unwrap(), b"previous");
    }
}
