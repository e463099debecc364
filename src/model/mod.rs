//! Data model for the output journal document.
//!
//! These types mirror the import schema of the target journaling application.
//! Field declaration order matters: serde serializes struct fields in
//! declaration order, and the output document is expected to list keys in
//! exactly this order.

use serde::{Deserialize, Serialize};

/// One journal record, the atomic unit of conversion.
///
/// Only `creation_date`, `modified_date`, `uuid`, `text` and `starred` are
/// sourced from the XML document; the device provenance fields are filled in
/// uniformly by the enricher and everything else stays at its zero default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Whether the entry carries a boolean "starred" marker in the source.
    pub starred: bool,
    pub editing_time: u32,
    pub creation_device_model: String,
    /// Creation timestamp, passed through from the source as an opaque string.
    pub creation_date: String,
    /// Unique identifier from the source; empty if the source lacked one.
    pub uuid: String,
    #[serde(rename = "creationOSName")]
    pub creation_os_name: String,
    pub creation_device: String,
    /// Always equal to `creation_date`; the source format has no separate
    /// modification timestamp.
    pub modified_date: String,
    pub is_pinned: bool,
    pub is_all_day: bool,
    pub time_zone: String,
    pub creation_device_type: String,
    pub duration: u32,
    /// Free-form body text.
    pub text: String,
    #[serde(rename = "creationOSVersion")]
    pub creation_os_version: String,
    /// Zero or one attached photo; the source bundle holds at most one photo
    /// per entry, named after the entry's uuid.
    pub photos: Vec<Photo>,
}

/// Metadata describing a single image attached to an [`Entry`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Byte length of the image file, from a filesystem stat.
    pub file_size: u64,
    pub order_in_entry: u32,
    pub creation_device: String,
    pub duration: u32,
    pub favorite: bool,
    #[serde(rename = "type")]
    pub kind: String,
    /// Equal to the owning entry's uuid; photos are named after their entry.
    pub identifier: String,
    pub date: String,
    pub exposure_bias_value: i32,
    /// Fixed at 350; the actual image is never decoded.
    pub height: u32,
    /// Fixed at 480; the actual image is never decoded.
    pub width: u32,
    /// Placeholder reuse of the entry uuid, not an actual checksum.
    pub md5: String,
    pub is_sketch: bool,
}

/// Static header of the output document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub version: String,
}

/// Aggregate root of the output document: a metadata header plus the full
/// ordered sequence of converted entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    pub metadata: Metadata,
    /// Entries in filesystem traversal order, stable within a single run but
    /// not guaranteed across platforms or filesystems.
    pub entries: Vec<Entry>,
}
