//! Cache directory utilities.
//!
//! Staged renders and, outside Windows, the installed images live under the
//! user cache directory (`~/.cache/netlock`, `~/Library/Caches/netlock`,
//! `%LOCALAPPDATA%\netlock`), falling back to the temp directory.

use std::path::PathBuf;

use crate::constants::APP_NAME;

/// Returns the root cache directory for the application.
#[must_use]
pub fn get_cache_dir() -> PathBuf {
    dirs::cache_dir().map_or_else(|| std::env::temp_dir().join(APP_NAME), |cache| cache.join(APP_NAME))
}

/// Returns a cache subdirectory for the given component (e.g. `renders`).
#[must_use]
pub fn get_cache_subdir(subdir: &str) -> PathBuf { get_cache_dir().join(subdir) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cache_dir_contains_app_name() {
        let path = get_cache_dir();
        let path_str = path.to_string_lossy();
        assert!(path_str.contains(APP_NAME), "Path should contain app name: {path_str}");
    }

    #[test]
    fn test_get_cache_subdir_contains_component() {
        let path = get_cache_subdir("renders");
        assert!(path.ends_with("renders"));
        assert!(path.to_string_lossy().contains(APP_NAME));
    }
}
