//! Bookmark command handlers
//!
//! Each mutating command loads once, mutates the in-memory store, and
//! flushes once through the persistence layer, so a command is a single
//! write regardless of what it changed.

use anyhow::{bail, Context, Result};

use fmark_core::{resolver, JsonPersistence, Store, TargetKind};

use crate::output::Output;
use crate::prompt::confirm;

/// Bookmark a file or directory
pub fn add(
    store: &mut Store,
    persistence: &JsonPersistence,
    name: String,
    path: String,
    output: &Output,
) -> Result<()> {
    let index = store.add(name, path).context("Failed to add bookmark")?;
    persistence
        .save(store.entries())
        .context("Failed to save bookmarks")?;

    output.success(&format!(
        "Bookmarked {}",
        store.display_path(index).unwrap_or_default()
    ));
    Ok(())
}

/// List all bookmarks in order
pub fn list(store: &Store, output: &Output) -> Result<()> {
    output.print_entries(store);
    Ok(())
}

/// Open a bookmarked file with the system handler
///
/// Only file targets are openable; directories and missing targets are
/// rejected with a message. Whether the handler reuses a window or tab
/// is up to the platform; the `new_tab` preference is passed along as a
/// hint and otherwise ignored.
pub fn open(store: &Store, index: usize, _new_tab: bool, output: &Output) -> Result<()> {
    let entry = match store.get(index) {
        Some(entry) => entry,
        None => bail!("No bookmark at index {} (list has {} entries)", index, store.len()),
    };

    match store.kind(index) {
        Some(TargetKind::File) => {
            let target = resolver::expand(entry.path());
            open::that(&target)
                .with_context(|| format!("Failed to open {:?}", target))?;
            output.success(&format!(
                "Opened {}",
                store.display_name(index).unwrap_or_default()
            ));
            Ok(())
        }
        Some(TargetKind::Directory) => {
            bail!(
                "'{}' is a directory; only file bookmarks can be opened",
                store.display_path(index).unwrap_or_default()
            );
        }
        Some(TargetKind::Missing) | None => {
            bail!("Target no longer exists: {}", entry.path());
        }
    }
}

/// Change a bookmark's display name
pub fn rename(
    store: &mut Store,
    persistence: &JsonPersistence,
    index: usize,
    name: String,
    output: &Output,
) -> Result<()> {
    store
        .rename(index, name)
        .context("Failed to rename bookmark")?;
    persistence
        .save(store.entries())
        .context("Failed to save bookmarks")?;

    output.success(&format!(
        "Renamed bookmark {} to '{}'",
        index,
        store.display_name(index).unwrap_or_default()
    ));
    Ok(())
}

/// Move a bookmark to a new position
pub fn move_entry(
    store: &mut Store,
    persistence: &JsonPersistence,
    from: usize,
    to: usize,
    output: &Output,
) -> Result<()> {
    store
        .move_entry(from, to)
        .context("Failed to move bookmark")?;
    persistence
        .save(store.entries())
        .context("Failed to save bookmarks")?;

    output.success(&format!("Moved bookmark {} to position {}", from, to));
    Ok(())
}

/// Delete a bookmark
pub fn delete(
    store: &mut Store,
    persistence: &JsonPersistence,
    index: usize,
    output: &Output,
) -> Result<()> {
    let name = match store.display_name(index) {
        Some(name) => name.to_string(),
        None => bail!("No bookmark at index {} (list has {} entries)", index, store.len()),
    };

    if output.should_prompt() {
        println!("Delete bookmark: {} - {}", index, name);
        if !confirm("Are you sure?")? {
            output.message("Cancelled.");
            return Ok(());
        }
    }

    store.delete(index).context("Failed to delete bookmark")?;
    persistence
        .save(store.entries())
        .context("Failed to save bookmarks")?;

    output.success(&format!("Deleted {}", name));
    Ok(())
}
