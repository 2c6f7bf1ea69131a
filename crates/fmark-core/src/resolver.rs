//! Target resolution
//!
//! Answers whether a bookmark's target currently exists on disk, and if
//! so whether it is a file or a directory. A `Missing` target never
//! invalidates a stored entry; stale bookmarks stay listable. Only new
//! bookmarks are validated, at `Store::add` time.

use std::path::PathBuf;

/// What a bookmark path currently points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A regular file; can be handed to the platform file opener
    File,
    /// A directory; listable but not openable as a single file
    Directory,
    /// Nothing at this path anymore
    Missing,
}

impl TargetKind {
    pub fn is_file(&self) -> bool {
        matches!(self, TargetKind::File)
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, TargetKind::Directory)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, TargetKind::Missing)
    }

    /// Short marker for listings and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::File => "file",
            TargetKind::Directory => "directory",
            TargetKind::Missing => "missing",
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expand a leading `~/` to the user's home directory
///
/// Stored paths may be home-relative; they are expanded before any
/// filesystem probe or open.
pub fn expand(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Check whether the target exists at all
pub fn exists(path: &str) -> bool {
    expand(path).exists()
}

/// Classify the target
pub fn kind(path: &str) -> TargetKind {
    let target = expand(path);
    if target.is_file() {
        TargetKind::File
    } else if target.is_dir() {
        TargetKind::Directory
    } else {
        TargetKind::Missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_kind_of_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.txt");
        fs::write(&file, "x").unwrap();

        let path = file.to_str().unwrap();
        assert!(exists(path));
        assert_eq!(kind(path), TargetKind::File);
        assert!(kind(path).is_file());
    }

    #[test]
    fn test_kind_of_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_str().unwrap().to_string();

        assert!(exists(&path));
        assert_eq!(kind(&path), TargetKind::Directory);
    }

    #[test]
    fn test_kind_of_missing_target() {
        let temp_dir = TempDir::new().unwrap();
        let gone = temp_dir.path().join("never-created");

        let path = gone.to_str().unwrap();
        assert!(!exists(path));
        assert_eq!(kind(path), TargetKind::Missing);
        assert!(kind(path).is_missing());
    }

    #[test]
    fn test_expand_home_relative() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand("~/notes.md"), home.join("notes.md"));
        }
        // Absolute paths pass through untouched
        assert_eq!(expand("/tmp/notes.md"), PathBuf::from("/tmp/notes.md"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TargetKind::File.to_string(), "file");
        assert_eq!(TargetKind::Directory.to_string(), "directory");
        assert_eq!(TargetKind::Missing.to_string(), "missing");
    }
}
