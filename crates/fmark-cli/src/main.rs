//! fmark CLI
//!
//! Command-line interface for fmark - bookmarks for local files and
//! directories.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fmark_core::{Config, JsonPersistence, Store};

mod commands;
mod output;
mod prompt;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "fmark")]
#[command(about = "fmark - bookmark local files and directories")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bookmark a file or directory
    Add {
        /// Path to bookmark (absolute or ~/ relative)
        path: String,
        /// Display name; defaults to the file name
        #[arg(short, long, default_value = "")]
        name: String,
    },
    /// List bookmarks in order
    #[command(alias = "ls")]
    List,
    /// Open a bookmarked file with the system handler
    Open {
        /// Bookmark index (as shown by `fmark list`)
        index: usize,
        /// Ask the handler not to open a new tab, where it supports one
        #[arg(long)]
        no_new_tab: bool,
    },
    /// Change a bookmark's display name
    Rename {
        /// Bookmark index
        index: usize,
        /// New name; empty reverts to the file name
        name: String,
    },
    /// Move a bookmark to a new position
    #[command(alias = "mv")]
    Move {
        /// Current index
        from: usize,
        /// Target index
        to: usize,
    },
    /// Delete a bookmark
    #[command(alias = "rm")]
    Delete {
        /// Bookmark index
        index: usize,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Show bookmark file location and counts
    Status,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (home_dir, bookmarks_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the store
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    let config = Config::load().context("Failed to load configuration")?;
    let persistence = JsonPersistence::new(&config);
    let entries = persistence.load().context("Failed to load bookmarks")?;
    let mut store = Store::from_entries(entries, config.home_prefix());

    match cli.command {
        Commands::Add { path, name } => {
            commands::entry::add(&mut store, &persistence, name, path, &output)
        }
        Commands::List => commands::entry::list(&store, &output),
        Commands::Open { index, no_new_tab } => {
            commands::entry::open(&store, index, !no_new_tab, &output)
        }
        Commands::Rename { index, name } => {
            commands::entry::rename(&mut store, &persistence, index, name, &output)
        }
        Commands::Move { from, to } => {
            commands::entry::move_entry(&mut store, &persistence, from, to, &output)
        }
        Commands::Delete { index } => {
            commands::entry::delete(&mut store, &persistence, index, &output)
        }
        Commands::Config { .. } => unreachable!(), // Handled above
        Commands::Status => commands::status::show(&store, &persistence, &output),
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

/// Initialize stderr logging
///
/// Warnings are on by default so recovery from an unreadable bookmark
/// file is visible; RUST_LOG overrides the filter.
fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
