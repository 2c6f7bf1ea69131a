//! The bookmark store
//!
//! Ordered, in-memory collection of entries plus all mutation logic.
//! Insertion order is user order: it is the order rendered and the
//! order persisted, with no implicit sorting. Indices are always dense
//! (`0..len`) and shift on delete, so callers must re-resolve indices
//! after any removal.
//!
//! Mutations never persist implicitly. The caller flushes through
//! [`crate::JsonPersistence`] when an editing session ends, which keeps
//! a burst of edits down to a single write.
//!
//! The store is single-writer. Wrap it in a lock before sharing it
//! across threads; none of the index invariants hold under concurrent
//! mutation.

use thiserror::Error;

use crate::models::Entry;
use crate::resolver::{self, TargetKind};

/// Errors from store mutations
///
/// Validation failures never mutate the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Add was called with a path that does not exist
    #[error("No file or directory at '{path}'; bookmark not created")]
    TargetNotFound { path: String },

    /// A mutation referenced an index outside the current list
    #[error("No bookmark at index {index} (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for store mutations
pub type StoreResult<T> = Result<T, StoreError>;

/// The ordered bookmark collection
pub struct Store {
    entries: Vec<Entry>,
    /// Home prefix stripped from paths for display, e.g. `/home/me/Documents/`
    home_prefix: String,
}

impl Store {
    /// Create an empty store
    pub fn new(home_prefix: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            home_prefix: home_prefix.into(),
        }
    }

    /// Build a store from a previously loaded entry list
    pub fn from_entries(entries: Vec<Entry>, home_prefix: impl Into<String>) -> Self {
        Self {
            entries,
            home_prefix: home_prefix.into(),
        }
    }

    /// Number of bookmarks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The ordered entry list, for rendering or persisting
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Get the entry at an index
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Bookmark a file or directory, appending it at the end
    ///
    /// The target must exist on disk; a nonexistent path is rejected
    /// with [`StoreError::TargetNotFound`] and nothing is appended.
    /// Returns the index of the new entry. Does not persist.
    pub fn add(&mut self, name: impl Into<String>, path: impl Into<String>) -> StoreResult<usize> {
        let path = path.into();
        if !resolver::exists(&path) {
            return Err(StoreError::TargetNotFound { path });
        }
        self.entries.push(Entry::new(name, path));
        Ok(self.entries.len() - 1)
    }

    /// Remove and return the entry at an index
    ///
    /// Entries after it shift down by one.
    pub fn delete(&mut self, index: usize) -> StoreResult<Entry> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Change the display name of an entry
    ///
    /// An empty name is allowed; display falls back to the final path
    /// segment. The target path is immutable: changing it means delete
    /// and re-add, so the new target gets validated.
    pub fn rename(&mut self, index: usize, new_name: impl Into<String>) -> StoreResult<()> {
        self.check_index(index)?;
        self.entries[index].name = new_name.into();
        Ok(())
    }

    /// Reposition an entry, shifting everything between the two slots
    ///
    /// Standard extract-then-insert: `[A, B, C]` with `move_entry(0, 2)`
    /// becomes `[B, C, A]`. Moving an entry onto its own index is a
    /// no-op.
    pub fn move_entry(&mut self, from: usize, to: usize) -> StoreResult<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Ok(())
    }

    /// The label to render for the entry at an index
    pub fn display_name(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(Entry::display_name)
    }

    /// The path to render for the entry at an index
    ///
    /// Strips the configured home prefix when present. Cosmetic only;
    /// the stored path is untouched.
    pub fn display_path(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| {
            entry
                .path
                .strip_prefix(&self.home_prefix)
                .unwrap_or(&entry.path)
        })
    }

    /// What the entry at an index currently points at
    ///
    /// A `Missing` answer does not invalidate the bookmark; stale
    /// entries stay listable.
    pub fn kind(&self, index: usize) -> Option<TargetKind> {
        self.entries.get(index).map(|entry| resolver::kind(&entry.path))
    }

    /// Whether the entry at an index targets a regular file
    ///
    /// Only file bookmarks are meaningful to hand to a file opener.
    pub fn is_file(&self, index: usize) -> bool {
        self.kind(index).map(|k| k.is_file()).unwrap_or(false)
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        if index >= self.entries.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}
