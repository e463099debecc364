//! The conversion pipeline: traversal, aggregation and serialization.
//!
//! Data flows strictly one way, fully sequentially: the walker lists source
//! files, each file is parsed and enriched into an [`Entry`], successful
//! entries are aggregated in traversal order, and the aggregate is written
//! out as a single pretty-printed JSON document. Entries that fail to convert
//! are logged and skipped; they never abort the run.

use crate::config::{Config, DeviceIdentity};
use crate::constants::{JOURNAL_FORMAT_VERSION, JSON_INDENT};
use crate::enrich::{apply_device_identity, attach_photo};
use crate::errors::AppResult;
use crate::model::{Entry, Journal, Metadata};
use crate::parser::parse_entry;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Summary of a completed conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Number of regular files found under the entries directory.
    pub total_files: usize,
    /// Number of entries successfully converted.
    pub converted: usize,
    /// Number of files skipped because parsing or enrichment failed.
    pub skipped: usize,
}

/// Lists every regular file nested at any depth beneath `root`.
///
/// Directories are excluded; symlink behavior is whatever the underlying
/// traversal does (links are not followed). Traversal order is
/// implementation-defined and only stable within a single run on a given
/// filesystem; callers must not read meaning into it.
///
/// # Errors
///
/// Returns `AppError::Walk` if the root does not exist or any directory in
/// the tree cannot be read. Unlike per-entry failures, a walk failure is
/// fatal: without a complete file listing the output would silently omit
/// entries.
pub fn collect_source_files(root: &Path) -> AppResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.path().to_path_buf());
        }
    }
    debug!("Found {} source files under {:?}", files.len(), root);
    Ok(files)
}

/// Converts one source file into a fully enriched [`Entry`].
///
/// # Errors
///
/// Returns the parse error or the enrichment error for this file; the caller
/// decides whether that is fatal (it is not, in the batch loop).
pub fn convert_file(path: &Path, photos_dir: &Path, device: &DeviceIdentity) -> AppResult<Entry> {
    let mut entry = parse_entry(path)?;
    apply_device_identity(&mut entry, device);
    attach_photo(&mut entry, photos_dir, device)?;
    Ok(entry)
}

/// Converts every source file under the configured entries directory.
///
/// Files are processed in walker order. A file that fails to parse or enrich
/// is logged with its path and the underlying error, then skipped; the run
/// continues with the remaining files. The full sequence is collected before
/// anything is serialized; there is no partial output.
///
/// # Errors
///
/// Returns `AppError::Walk` if the entries directory itself cannot be
/// traversed. Per-file failures are not errors at this level.
pub fn collect_entries(config: &Config) -> AppResult<(Vec<Entry>, ConversionReport)> {
    let files = collect_source_files(&config.entries_dir())?;
    let photos_dir = config.photos_dir();

    let mut entries = Vec::with_capacity(files.len());
    let mut skipped = 0;

    for file in &files {
        match convert_file(file, &photos_dir, &config.device) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                warn!("Skipping {:?}: {}", file, e);
                skipped += 1;
            }
        }
    }

    let report = ConversionReport {
        total_files: files.len(),
        converted: entries.len(),
        skipped,
    };
    Ok((entries, report))
}

/// Wraps the converted entries with the static metadata header.
pub fn build_journal(entries: Vec<Entry>) -> Journal {
    Journal {
        metadata: Metadata {
            version: JOURNAL_FORMAT_VERSION.to_string(),
        },
        entries,
    }
}

/// Writes the journal as pretty-printed UTF-8 JSON to `path`.
///
/// Missing parent directories are created first; the file itself is created
/// or truncated. Output uses a one-space indent and ends with a newline. The
/// writer is flushed explicitly so that a deferred write failure surfaces in
/// the returned result instead of being swallowed on drop.
///
/// # Errors
///
/// Returns `AppError::Io` if the destination cannot be created or written,
/// or `AppError::Json` if encoding fails. Either failure may leave a missing
/// or truncated output file behind.
pub fn write_journal(journal: &Journal, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    journal.serialize(&mut ser)?;

    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Runs the whole pipeline: walk, convert, aggregate, serialize.
///
/// # Errors
///
/// Propagates the fatal error classes: traversal failure, destination
/// open/create failure, or encoding failure. Per-entry failures only show up
/// in the report's `skipped` count.
pub fn run(config: &Config) -> AppResult<ConversionReport> {
    info!("Converting entries from {:?}", config.source_dir);

    let (entries, report) = collect_entries(config)?;
    let journal = build_journal(entries);
    write_journal(&journal, &config.output_path)?;

    info!(
        "Wrote {} entries to {:?} ({} of {} source files skipped)",
        report.converted, config.output_path, report.skipped, report.total_files
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entry_xml(uuid: &str, text: &str, starred: bool) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
	<key>Creation Date</key>
	<date>2023-08-01T10:00:00Z</date>
	<key>Entry Text</key>
	<string>{}</string>
	<key>Starred</key>
	{}
	<key>UUID</key>
	<string>{}</string>
</dict>
</plist>
"#,
            text,
            if starred { "<true/>" } else { "<false/>" },
            uuid
        )
    }

    fn set_up_bundle() -> (Config, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let source_dir = temp_dir.path().join("export");
        fs::create_dir_all(source_dir.join("entries")).unwrap();
        fs::create_dir_all(source_dir.join("photos")).unwrap();

        let config = Config {
            source_dir,
            output_path: temp_dir.path().join("out").join("Journal.json"),
            ..Config::default()
        };
        (config, temp_dir)
    }

    #[test]
    fn test_collect_source_files_recurses_and_skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("top.doentry"), "x").unwrap();
        fs::write(dir.path().join("a/b/nested.doentry"), "x").unwrap();

        let files = collect_source_files(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.is_file()));
    }

    #[test]
    fn test_collect_source_files_missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-dir");

        assert!(collect_source_files(&missing).is_err());
    }

    #[test]
    fn test_collect_entries_skips_malformed_files() {
        let (config, _temp_dir) = set_up_bundle();
        let entries_dir = config.entries_dir();
        fs::write(
            entries_dir.join("good.doentry"),
            entry_xml("ABC123", "Hello", true),
        )
        .unwrap();
        // Truncated in the middle of a tag.
        fs::write(entries_dir.join("bad.doentry"), "<plist><dict><key").unwrap();

        let (entries, report) = collect_entries(&config).unwrap();

        assert_eq!(report.total_files, 2);
        assert_eq!(report.converted, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].uuid, "ABC123");
    }

    #[test]
    fn test_collect_entries_applies_uniform_device_identity() {
        let (config, _temp_dir) = set_up_bundle();
        let entries_dir = config.entries_dir();
        fs::write(entries_dir.join("a.doentry"), entry_xml("A1", "one", false)).unwrap();
        fs::write(entries_dir.join("b.doentry"), entry_xml("B2", "two", true)).unwrap();

        let (entries, report) = collect_entries(&config).unwrap();

        assert_eq!(report.converted, 2);
        for entry in &entries {
            assert_eq!(entry.creation_device_model, config.device.model);
            assert_eq!(entry.creation_os_name, config.device.os_name);
            assert_eq!(entry.creation_device, config.device.device_name);
            assert_eq!(entry.time_zone, config.device.time_zone);
            assert_eq!(entry.creation_device_type, config.device.device_type);
            assert_eq!(entry.creation_os_version, config.device.os_version);
        }
    }

    #[test]
    fn test_convert_file_attaches_matching_photo() {
        let (config, _temp_dir) = set_up_bundle();
        let entry_path = config.entries_dir().join("abc.doentry");
        fs::write(&entry_path, entry_xml("ABC123", "Hello", true)).unwrap();
        fs::write(config.photos_dir().join("ABC123.jpg"), vec![0u8; 2048]).unwrap();

        let entry = convert_file(&entry_path, &config.photos_dir(), &config.device).unwrap();

        assert_eq!(entry.photos.len(), 1);
        assert_eq!(entry.photos[0].file_size, 2048);
        assert_eq!(entry.photos[0].identifier, "ABC123");
    }

    #[test]
    fn test_build_journal_sets_metadata_version() {
        let journal = build_journal(Vec::new());
        assert_eq!(journal.metadata.version, "1.0");
        assert!(journal.entries.is_empty());
    }

    #[test]
    fn test_write_journal_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deeply/nested/Journal.json");

        write_journal(&build_journal(Vec::new()), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with('\n'));
        let parsed: Journal = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.metadata.version, "1.0");
    }

    #[test]
    fn test_write_journal_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Journal.json");
        fs::write(&path, "stale content that is much longer than the new one").unwrap();

        write_journal(&build_journal(Vec::new()), &path).unwrap();

        let parsed: Journal = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(parsed.entries.is_empty());
    }

    #[test]
    fn test_run_end_to_end() {
        let (config, _temp_dir) = set_up_bundle();
        fs::write(
            config.entries_dir().join("abc.doentry"),
            entry_xml("ABC123", "Hello", true),
        )
        .unwrap();
        fs::write(config.photos_dir().join("ABC123.jpg"), vec![0u8; 2048]).unwrap();

        let report = run(&config).unwrap();

        assert_eq!(
            report,
            ConversionReport {
                total_files: 1,
                converted: 1,
                skipped: 0
            }
        );

        let journal: Journal =
            serde_json::from_str(&fs::read_to_string(&config.output_path).unwrap()).unwrap();
        assert_eq!(journal.entries.len(), 1);
        let entry = &journal.entries[0];
        assert!(entry.starred);
        assert_eq!(entry.creation_date, "2023-08-01T10:00:00Z");
        assert_eq!(entry.modified_date, "2023-08-01T10:00:00Z");
        assert_eq!(entry.text, "Hello");
        assert_eq!(entry.uuid, "ABC123");
        assert_eq!(entry.photos.len(), 1);
        assert_eq!(entry.photos[0].file_size, 2048);
        assert_eq!(entry.photos[0].identifier, "ABC123");
    }

    #[test]
    fn test_run_missing_entries_directory_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            source_dir: temp_dir.path().join("does-not-exist"),
            output_path: temp_dir.path().join("Journal.json"),
            ..Config::default()
        };

        assert!(run(&config).is_err());
        assert!(!config.output_path.exists());
    }
}
