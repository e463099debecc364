//! Entry enrichment: device provenance and photo metadata.
//!
//! The source bundle records neither device provenance nor photo metadata, so
//! both are synthesized here: the configured [`DeviceIdentity`] is stamped
//! onto every entry, and a photo record is attached when the photos directory
//! holds a matching image.

use crate::config::DeviceIdentity;
use crate::constants::{PHOTO_EXTENSION, PHOTO_HEIGHT, PHOTO_TYPE, PHOTO_WIDTH};
use crate::errors::AppResult;
use crate::model::{Entry, Photo};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Overwrites the entry's device, OS and timezone fields with the configured
/// identity. Applied uniformly to every entry regardless of source content.
pub fn apply_device_identity(entry: &mut Entry, device: &DeviceIdentity) {
    entry.creation_device_model = device.model.clone();
    entry.creation_os_name = device.os_name.clone();
    entry.creation_device = device.device_name.clone();
    entry.time_zone = device.time_zone.clone();
    entry.creation_device_type = device.device_type.clone();
    entry.creation_os_version = device.os_version.clone();
}

/// Attaches photo metadata to the entry if a matching image exists.
///
/// Photos are named `<uuid>.jpg` under the bundle's photos directory. A
/// missing file means the entry simply has no photo and is success; any other
/// filesystem error (permissions, I/O) is an error for this entry.
///
/// The synthesized record takes its size from a filesystem stat; dimensions
/// and type are fixed, the image is never decoded, and `md5` reuses the entry
/// uuid as a placeholder rather than computing a digest.
///
/// # Errors
///
/// Returns `AppError::Io` for any stat failure other than file-not-found.
pub fn attach_photo(entry: &mut Entry, photos_dir: &Path, device: &DeviceIdentity) -> AppResult<()> {
    let photo_path = photos_dir.join(format!("{}.{}", entry.uuid, PHOTO_EXTENSION));

    let meta = match fs::metadata(&photo_path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No photo for entry {:?}", entry.uuid);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    debug!("Attaching photo {:?} ({} bytes)", photo_path, meta.len());

    entry.photos.push(Photo {
        file_size: meta.len(),
        creation_device: device.device_name.clone(),
        kind: PHOTO_TYPE.to_string(),
        identifier: entry.uuid.clone(),
        date: entry.creation_date.clone(),
        height: PHOTO_HEIGHT,
        width: PHOTO_WIDTH,
        md5: entry.uuid.clone(),
        ..Photo::default()
    });

    Ok(())
}
