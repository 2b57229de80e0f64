//! Configuration template generation.
//!
//! Generates a commented configuration template with all available options.

use std::path::Path;

use crate::network::DEFAULT_KEYWORDS;

/// Generates a configuration template with all options commented out.
#[must_use]
pub fn generate_config_template() -> String {
    let keywords = DEFAULT_KEYWORDS
        .iter()
        .map(|keyword| format!("  //     \"{keyword}\""))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        r##"// netlock Configuration File
// ===========================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.

{{
  // Title drawn above the network information
  // "title": "Network Configuration",

  // ============================================================================
  // Canvas
  // ============================================================================
  // "canvas": {{
  //   // Image size in pixels
  //   "width": 1920,
  //   "height": 1080,
  //
  //   // Left margin, title and body origins
  //   "marginLeft": 50,
  //   "titleTop": 50,
  //   "bodyTop": 100,
  //
  //   // Distance between lines, and offset of the second column from the center
  //   "linePitch": 18,
  //   "columnGutter": 20,
  //
  //   // No text is placed in this band at the bottom of the image
  //   "bottomMargin": 100,
  //
  //   // Stop after this many lines even if space remains
  //   // "maxLines": 40,
  //
  //   "colors": {{
  //     "gradientTop": "#141E32",
  //     "gradientBottom": "#283C5A",
  //     "accent": "#78C8FF",
  //     "accentOpacity": 100,
  //     "text": "#FFFFFF",
  //     "shadow": "#000000",
  //     "shadowOpacity": 128
  //   }}
  // }},

  // ============================================================================
  // Schedule
  // ============================================================================
  // "schedule": {{
  //   // Seconds between refreshes
  //   "interval": 300,
  //
  //   // Seconds before retrying after a failed refresh
  //   "retryInterval": 60
  // }},

  // ============================================================================
  // Network information
  // ============================================================================
  // "source": {{
  //   // Command to run as [program, args...]; unset uses the platform default,
  //   // an empty list disables it
  //   // "command": ["ipconfig", "/all"],
  //
  //   // Adapter summary: "always", "fallback" (when the command fails) or "never"
  //   "adapters": "fallback",
  //   "includeLoopback": false,
  //
  //   // Only show lines containing one of these keywords. The default is an
  //   // empty list, which shows everything; these are the usual ipconfig fields.
  //   "keywords": [
{keywords}
  //   ],
  //
  //   // Maximum number of lines kept by the keyword filter
  //   "keywordLimit": 30
  // }},

  // ============================================================================
  // Installation
  // ============================================================================
  // "installer": {{
  //   // "lockScreen" or "desktop"
  //   "target": "lockScreen",
  //
  //   // Installed image path; unset uses the platform default
  //   // "path": "~/Pictures/netlock.png",
  //
  //   // Where the image is rendered before installing; unset uses the cache directory
  //   // "stagingPath": "~/.cache/netlock/renders/ip_lockscreen_bg.png",
  //
  //   // Windows only: write the lock screen policy (requires administrator rights)
  //   "applyPolicy": true
  // }}
}}
"##
    )
}

/// Writes the configuration template to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn create_config_file(path: &Path) -> std::io::Result<()> {
    crate::platform::write_atomic(path, generate_config_template().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetlockConfig;

    #[test]
    fn test_template_parses_to_defaults() {
        let template = generate_config_template();
        let reader = json_comments::StripComments::new(template.as_bytes());
        let config: NetlockConfig = serde_json::from_reader(reader).unwrap();
        assert_eq!(config, NetlockConfig::default());
    }

    #[test]
    fn test_template_lists_default_keywords() {
        let template = generate_config_template();
        for keyword in DEFAULT_KEYWORDS {
            assert!(template.contains(keyword), "missing keyword {keyword}");
        }
    }

    #[test]
    fn test_create_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netlock").join("config.jsonc");
        create_config_file(&path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("\"interval\": 300"));
    }
}
