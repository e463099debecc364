//! Configuration management for the dayport converter.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring the
//! source bundle directory and the output file path, and carries the device
//! identity stamped onto every converted entry.
//!
//! # Environment Variables
//!
//! - `DAYPORT_SOURCE`: Path to the source bundle directory (defaults to `Journal_dayone`)
//! - `DAYPORT_OUTPUT`: Path of the output JSON document (defaults to `import_journal/Journal.json`)

use crate::constants::{
    DEFAULT_DEVICE_MODEL, DEFAULT_DEVICE_NAME, DEFAULT_DEVICE_TYPE, DEFAULT_OS_NAME,
    DEFAULT_OS_VERSION, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_DIR, DEFAULT_TIME_ZONE,
    ENTRIES_SUBDIR, ENV_VAR_DAYPORT_OUTPUT, ENV_VAR_DAYPORT_SOURCE, PHOTOS_SUBDIR,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

/// Identity of the device recorded as the creator of every converted entry.
///
/// The source bundle carries no device provenance, so these values are applied
/// uniformly to all entries. They describe the operator's own device and are
/// deliberately configuration, not data read from the source.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceIdentity {
    /// Hardware model identifier (e.g. "Mac14,7").
    pub model: String,
    /// Operating system name (e.g. "macOS").
    pub os_name: String,
    /// Operating system version (e.g. "13.5.1").
    pub os_version: String,
    /// Human-readable device name.
    pub device_name: String,
    /// Device type (e.g. "MacBook Pro").
    pub device_type: String,
    /// Timezone identifier recorded on every entry.
    pub time_zone: String,
}

impl Default for DeviceIdentity {
    fn default() -> Self {
        DeviceIdentity {
            model: DEFAULT_DEVICE_MODEL.to_string(),
            os_name: DEFAULT_OS_NAME.to_string(),
            os_version: DEFAULT_OS_VERSION.to_string(),
            device_name: DEFAULT_DEVICE_NAME.to_string(),
            device_type: DEFAULT_DEVICE_TYPE.to_string(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
        }
    }
}

/// Configuration for one conversion run.
///
/// # Examples
///
/// Creating a configuration manually (useful in tests):
/// ```
/// use dayport::config::{Config, DeviceIdentity};
/// use std::path::PathBuf;
///
/// let config = Config {
///     source_dir: PathBuf::from("/path/to/export"),
///     output_path: PathBuf::from("/path/to/Journal.json"),
///     device: DeviceIdentity::default(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root of the source bundle, expected to contain `entries/` and `photos/`.
    pub source_dir: PathBuf,

    /// Path of the output JSON document. Parent directories are created by the
    /// serializer if missing.
    pub output_path: PathBuf,

    /// Device identity stamped onto every converted entry.
    pub device: DeviceIdentity,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            device: DeviceIdentity::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to the
    /// built-in defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Currently infallible in practice; returns `AppResult` so future
    /// validation at load time does not change the signature.
    pub fn load() -> AppResult<Self> {
        let source_dir = env::var(ENV_VAR_DAYPORT_SOURCE)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SOURCE_DIR));

        let output_path = env::var(ENV_VAR_DAYPORT_OUTPUT)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_PATH));

        Ok(Config {
            source_dir,
            output_path,
            device: DeviceIdentity::default(),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the source directory or output path is
    /// empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Source directory must not be empty".to_string(),
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Output path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Directory holding the per-entry XML files.
    pub fn entries_dir(&self) -> PathBuf {
        self.source_dir.join(ENTRIES_SUBDIR)
    }

    /// Directory holding the per-entry photos.
    pub fn photos_dir(&self) -> PathBuf {
        self.source_dir.join(PHOTOS_SUBDIR)
    }
}
