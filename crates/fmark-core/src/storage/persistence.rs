//! Bookmark file persistence
//!
//! Handles saving and loading the bookmark list to/from the filesystem.
//! Uses atomic writes (write to temp file, then rename) so a concurrent
//! reader never sees a partially-written file.
//!
//! On-disk format: a single JSON array of `{"name", "path"}` objects,
//! with no envelope. This matches bookmark files written by older
//! versions of the tool.
//!
//! Default location: `~/Documents/.bookmarks.json` (configurable via
//! `Config`).

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::Config;
use crate::models::Entry;
use crate::storage::error::{StorageError, StorageResult};

/// Persistence layer for the bookmark file
pub struct JsonPersistence {
    path: PathBuf,
}

impl JsonPersistence {
    /// Create a persistence handler for the configured bookmark file
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.bookmarks_path(),
        }
    }

    /// Create a persistence handler for an explicit path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The bookmark file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if a bookmark file exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Save the ordered entry list using an atomic write
    ///
    /// Write failures surface to the caller; nothing is retried here.
    pub fn save(&self, entries: &[Entry]) -> StorageResult<()> {
        let bytes = serde_json::to_vec(entries)?;
        atomic_write(&self.path, &bytes)
    }

    /// Load the entry list from disk
    ///
    /// A missing file is not an error: it yields an empty list so a
    /// first run starts cleanly. A file that exists but does not parse
    /// as the expected array also yields an empty list, because a small
    /// bookmark list is not worth blocking startup over. The unreadable
    /// file is copied aside and a warning is logged so the data loss is
    /// not silent.
    pub fn load(&self) -> StorageResult<Vec<Entry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path).map_err(|source| StorageError::ReadError {
            path: self.path.clone(),
            source,
        })?;

        match serde_json::from_slice(&bytes) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                let backup = corrupt_backup_path(&self.path);
                if let Err(backup_err) = fs::write(&backup, &bytes) {
                    warn!(
                        "could not back up unreadable bookmark file {:?}: {}",
                        self.path, backup_err
                    );
                }
                warn!(
                    "bookmark file {:?} is not a valid bookmark array ({}); \
                     starting with an empty list, original kept at {:?}",
                    self.path, err, backup
                );
                Ok(Vec::new())
            }
        }
    }
}

/// Where an unreadable bookmark file gets copied before recovery
fn corrupt_backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".corrupt.backup");
    PathBuf::from(name)
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // Temp file in the same directory, so the rename stays on one filesystem
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)
        .map_err(|source| StorageError::from_io(source, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|source| StorageError::from_io(source, temp_path.clone()))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|source| StorageError::from_io(source, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|source| StorageError::AtomicWriteFailed {
        from: temp_path,
        to: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
