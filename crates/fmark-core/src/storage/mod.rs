//! Storage layer
//!
//! Persists the bookmark list as a single JSON array of
//! `{"name", "path"}` objects, written atomically. Loading is tolerant:
//! a missing file is an empty list, and an unreadable file is backed up
//! and replaced by an empty list rather than blocking startup.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::JsonPersistence;
