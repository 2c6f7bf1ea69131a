//! Data models for fmark
//!
//! Defines the core data structure: a bookmark `Entry` that points at a
//! file or directory on the local filesystem. The serialized form is the
//! legacy on-disk shape, a bare `{"name": ..., "path": ...}` object, so
//! bookmark files written by older versions keep loading.

use serde::{Deserialize, Serialize};

/// A saved bookmark
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    /// Display label; empty means "derive the label from the path"
    pub name: String,
    /// Absolute or home-relative path of the target
    pub path: String,
}

impl Entry {
    /// Create a new entry for the given path
    ///
    /// Entries enter the store through [`crate::Store::add`], which
    /// validates that the target exists before constructing one.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Get the stored label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the stored target path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The label to render for this entry
    ///
    /// Falls back to the final path segment when no name was set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.path.rsplit('/').next().unwrap_or(&self.path)
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_new() {
        let entry = Entry::new("Notes", "~/Documents/notes.md");
        assert_eq!(entry.name(), "Notes");
        assert_eq!(entry.path(), "~/Documents/notes.md");
    }

    #[test]
    fn test_display_name_prefers_stored_name() {
        let entry = Entry::new("My Notes", "~/Documents/notes.md");
        assert_eq!(entry.display_name(), "My Notes");
    }

    #[test]
    fn test_display_name_falls_back_to_leaf_segment() {
        let entry = Entry::new("", "~/Documents/projects/notes.md");
        assert_eq!(entry.display_name(), "notes.md");

        let entry = Entry::new("", "/var/log");
        assert_eq!(entry.display_name(), "log");
    }

    #[test]
    fn test_display_name_without_separator() {
        let entry = Entry::new("", "notes.md");
        assert_eq!(entry.display_name(), "notes.md");
    }

    #[test]
    fn test_serialized_shape_is_legacy_format() {
        let entry = Entry::new("Notes", "~/Documents/notes.md");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Notes", "path": "~/Documents/notes.md"})
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let entry = Entry::new("", "/tmp/things");
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
