//! Constants used throughout the application.
//!
//! This module contains all constants used in the dayport converter, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "dayport";
/// The description of the application.
pub const APP_DESCRIPTION: &str =
    "Converts a Day One XML journal export into a consolidated JSON import bundle";

// Configuration Keys & Environment Variables
/// Environment variable overriding the source bundle directory.
pub const ENV_VAR_DAYPORT_SOURCE: &str = "DAYPORT_SOURCE";
/// Environment variable overriding the output file path.
pub const ENV_VAR_DAYPORT_OUTPUT: &str = "DAYPORT_OUTPUT";

// File System Layout
/// Default source bundle directory.
pub const DEFAULT_SOURCE_DIR: &str = "Journal_dayone";
/// Default output file path.
pub const DEFAULT_OUTPUT_PATH: &str = "import_journal/Journal.json";
/// Sub-directory of the source bundle holding per-entry XML files.
pub const ENTRIES_SUBDIR: &str = "entries";
/// Sub-directory of the source bundle holding per-entry photos.
pub const PHOTOS_SUBDIR: &str = "photos";
/// File extension of per-entry photos.
pub const PHOTO_EXTENSION: &str = "jpg";

// Output Document
/// Version string written into the output document's metadata header.
pub const JOURNAL_FORMAT_VERSION: &str = "1.0";
/// Indentation unit for the pretty-printed output document.
pub const JSON_INDENT: &[u8] = b" ";
/// Photo pixel height recorded for every attached photo (not read from the image).
pub const PHOTO_HEIGHT: u32 = 350;
/// Photo pixel width recorded for every attached photo (not read from the image).
pub const PHOTO_WIDTH: u32 = 480;
/// Photo type string recorded for every attached photo.
pub const PHOTO_TYPE: &str = "jpeg";

// Source Document Keys
/// Dictionary key carrying the entry's creation timestamp.
pub const KEY_CREATION_DATE: &str = "Creation Date";
/// Dictionary key carrying the entry's body text.
pub const KEY_ENTRY_TEXT: &str = "Entry Text";
/// Dictionary key carrying the entry's unique identifier.
pub const KEY_UUID: &str = "UUID";

// Device Identity Defaults
/// Default device model identifier.
pub const DEFAULT_DEVICE_MODEL: &str = "Mac14,7";
/// Default operating system name.
pub const DEFAULT_OS_NAME: &str = "macOS";
/// Default operating system version.
pub const DEFAULT_OS_VERSION: &str = "13.5.1";
/// Default human-readable device name.
pub const DEFAULT_DEVICE_NAME: &str = "MacBook Pro";
/// Default device type.
pub const DEFAULT_DEVICE_TYPE: &str = "MacBook Pro";
/// Default timezone identifier.
pub const DEFAULT_TIME_ZONE: &str = "Europe/Moscow";
