//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and version information.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Flizzweb";

/// Directory name under the platform config dir.
pub const APP_DATA_DIR: &str = "Flizzweb";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "FLIZZWEB_CONFIG_DIR";

/// Log file name inside the config directory.
pub const LOG_FILE_NAME: &str = "flizzweb.log";
