//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use fmark_core::{Store, TargetKind};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print the bookmark list in order
    pub fn print_entries(&self, store: &Store) {
        match self.format {
            OutputFormat::Human => {
                if store.is_empty() {
                    println!("No bookmarks yet. Add one with `fmark add <path>`.");
                    return;
                }
                for index in 0..store.len() {
                    let marker = match store.kind(index) {
                        Some(TargetKind::Directory) => "/",
                        Some(TargetKind::Missing) | None => "!",
                        Some(TargetKind::File) => " ",
                    };
                    println!(
                        "{:>3} {} {:<30} {}",
                        index,
                        marker,
                        truncate(store.display_name(index).unwrap_or(""), 30),
                        truncate(store.display_path(index).unwrap_or(""), 45)
                    );
                }
                println!("\n{} bookmark(s)", store.len());
            }
            OutputFormat::Json => {
                let rows: Vec<_> = store
                    .entries()
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        serde_json::json!({
                            "index": index,
                            "name": entry.name(),
                            "path": entry.path(),
                            "display_name": store.display_name(index),
                            "display_path": store.display_path(index),
                            "kind": store.kind(index).map(|k| k.as_str()),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows).unwrap());
            }
            OutputFormat::Quiet => {
                for entry in store.entries() {
                    println!("{}", entry.path());
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Truncate a string to max length in bytes, adding "..." if truncated
///
/// Cuts on a char boundary, so names and paths with multibyte
/// characters never split mid-character.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let limit = max_len.saturating_sub(3);
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= limit)
        .last()
        .unwrap_or(0);
    format!("{}...", &s[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
    }

    #[test]
    fn test_truncate_multibyte_on_char_boundary() {
        // Mixed ASCII and multibyte, long enough that a raw byte slice
        // would land inside a character
        let name = "a日本語のとても長いブックマーク名です";
        let cut = truncate(name, 30);
        assert!(cut.ends_with("..."));
        assert!(cut.len() <= 30);

        // Short multibyte strings pass through untouched
        assert_eq!(truncate("日本語", 30), "日本語");
    }

    #[test]
    fn test_should_prompt_only_in_human_mode() {
        assert!(Output::new(OutputFormat::Human).should_prompt());
        assert!(!Output::new(OutputFormat::Json).should_prompt());
        assert!(!Output::new(OutputFormat::Quiet).should_prompt());
    }
}
