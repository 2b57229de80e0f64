//! Application-wide constants.

/// Application name, used for the config and cache directories.
pub const APP_NAME: &str = "netlock";

/// Title drawn above the network information.
pub const DEFAULT_TITLE: &str = "Network Configuration";
