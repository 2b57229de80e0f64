//! Path utilities for shell-like path expansion.
//!
//! Configured paths (output files, install targets) may start with `~` and may
//! be relative to the configuration file they came from.

use std::path::{Path, PathBuf};

/// Expands a leading tilde to the user's home directory.
///
/// - Absolute paths are returned as-is
/// - Home-relative paths (`~/...`) are expanded
/// - Relative paths are returned as-is (see [`expand_and_resolve`])
///
/// Surrounding whitespace is ignored and an empty string yields an empty path.
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.as_ref())
}

/// Expands a path and resolves it against `base_dir` when it is relative.
///
/// Used for paths read from a configuration file, which are relative to the
/// directory holding that file.
#[must_use]
pub fn expand_and_resolve(path: &str, base_dir: &Path) -> PathBuf {
    let expanded = expand(path);

    if expanded.as_os_str().is_empty() || expanded.is_absolute() {
        return expanded;
    }

    base_dir.join(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_empty_path() {
        assert_eq!(expand(""), PathBuf::new());
        assert_eq!(expand("   "), PathBuf::new());
    }

    #[test]
    fn test_expand_absolute_path() {
        let result = expand("/var/lib/netlock/background.png");
        assert_eq!(result, PathBuf::from("/var/lib/netlock/background.png"));
    }

    #[test]
    fn test_expand_relative_path() {
        assert_eq!(expand("renders/out.png"), PathBuf::from("renders/out.png"));
    }

    #[test]
    fn test_expand_tilde_path() {
        let result = expand("~/Pictures/lockscreen.png");
        assert!(!result.to_string_lossy().starts_with('~'));
        assert!(result.ends_with("Pictures/lockscreen.png"));
    }

    #[test]
    fn test_expand_and_resolve_relative() {
        let base = PathBuf::from("/etc/netlock");
        let result = expand_and_resolve("backgrounds/current.png", &base);
        assert_eq!(result, PathBuf::from("/etc/netlock/backgrounds/current.png"));
    }

    #[test]
    fn test_expand_and_resolve_keeps_absolute_and_empty() {
        let base = PathBuf::from("/etc/netlock");
        assert_eq!(expand_and_resolve("/srv/bg.png", &base), PathBuf::from("/srv/bg.png"));
        assert_eq!(expand_and_resolve("", &base), PathBuf::new());
    }

    #[test]
    fn test_expand_and_resolve_tilde_ignores_base() {
        let base = PathBuf::from("/etc/netlock");
        let result = expand_and_resolve("~/bg.png", &base);
        assert!(!result.to_string_lossy().contains("/etc/netlock"));
        assert!(result.ends_with("bg.png"));
    }
}
