//! fmark core library
//!
//! This crate provides the core functionality for fmark, a small
//! bookmark manager for local files and directories.
//!
//! # Architecture
//!
//! The bookmark list lives in memory as an ordered `Store`. Mutations
//! (add, delete, rename, move) never touch disk; the caller flushes the
//! list through `JsonPersistence` when an editing session ends, and
//! loads it back once at startup.
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let persistence = JsonPersistence::new(&config);
//!
//! let mut store = Store::from_entries(persistence.load()?, config.home_prefix());
//! store.add("Notes", "~/Documents/notes.md")?;
//!
//! persistence.save(store.entries())?;
//! ```
//!
//! # Modules
//!
//! - `store`: Ordered bookmark collection and all mutation logic
//! - `models`: The bookmark `Entry` data structure
//! - `resolver`: Target resolution (file / directory / missing)
//! - `storage`: JSON persistence with atomic writes
//! - `config`: Application configuration

pub mod config;
pub mod models;
pub mod resolver;
pub mod storage;
pub mod store;

pub use config::Config;
pub use models::Entry;
pub use resolver::TargetKind;
pub use storage::{JsonPersistence, StorageError, StorageResult};
pub use store::{Store, StoreError};
