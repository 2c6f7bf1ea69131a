//! Status command handler

use anyhow::Result;

use fmark_core::{JsonPersistence, Store, TargetKind};

use crate::output::{Output, OutputFormat};

/// Show status information
pub fn show(store: &Store, persistence: &JsonPersistence, output: &Output) -> Result<()> {
    let stale = (0..store.len())
        .filter(|&i| matches!(store.kind(i), Some(TargetKind::Missing)))
        .count();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "bookmarks_file": persistence.path(),
                    "file_exists": persistence.exists(),
                    "counts": {
                        "bookmarks": store.len(),
                        "stale": stale
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", store.len());
        }
        OutputFormat::Human => {
            println!("fmark Status");
            println!("============");
            println!();
            println!("Bookmark file:");
            println!("  Location: {}", persistence.path().display());
            println!(
                "  On disk:  {}",
                if persistence.exists() { "yes" } else { "not yet" }
            );
            println!();
            println!("Contents:");
            println!("  Bookmarks: {}", store.len());
            if stale > 0 {
                println!("  Stale:     {} (target no longer exists)", stale);
            }
        }
    }

    Ok(())
}
