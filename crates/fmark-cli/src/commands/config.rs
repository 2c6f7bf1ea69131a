//! Config command handlers

use anyhow::{bail, Context, Result};

use fmark_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "home_dir": config.home_dir,
                    "bookmarks_file": config.bookmarks_file,
                    "bookmarks_path": config.bookmarks_path(),
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.bookmarks_path().display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  home_dir:       {}", config.home_dir.display());
            println!(
                "  bookmarks_file: {}",
                config
                    .bookmarks_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(default)".to_string())
            );
            println!();
            println!("Bookmark file: {}", config.bookmarks_path().display());
            println!("Config file:   {}", Config::config_file_path().display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(key: String, value: String, output: &Output) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    match key.as_str() {
        "home_dir" => {
            config.home_dir = value.clone().into();
        }
        "bookmarks_file" => {
            config.bookmarks_file = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.clone().into())
            };
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: home_dir, bookmarks_file",
                key
            );
        }
    }

    config.save().context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}
