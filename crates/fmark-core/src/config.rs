//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/fmark/config.toml)
//! 3. Environment variables (FMARK_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix
const ENV_PREFIX: &str = "FMARK";

/// Name of the bookmark file inside the home directory
const BOOKMARKS_FILE_NAME: &str = ".bookmarks.json";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory treated as "home" for bookmarks: the default parent of
    /// the bookmark file, and the prefix stripped from displayed paths
    #[serde(default = "default_home_dir")]
    pub home_dir: PathBuf,

    /// Explicit bookmark file location; overrides `home_dir` placement
    #[serde(default)]
    pub bookmarks_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_dir: default_home_dir(),
            bookmarks_file: None,
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (FMARK_HOME_DIR, FMARK_BOOKMARKS_FILE)
    /// 2. Config file (~/.config/fmark/config.toml or FMARK_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // FMARK_HOME_DIR
        if let Ok(val) = std::env::var(format!("{}_HOME_DIR", ENV_PREFIX)) {
            self.home_dir = PathBuf::from(val);
        }

        // FMARK_BOOKMARKS_FILE
        if let Ok(val) = std::env::var(format!("{}_BOOKMARKS_FILE", ENV_PREFIX)) {
            self.bookmarks_file = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with FMARK_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fmark")
            .join("config.toml")
    }

    /// Get the path to the bookmark file
    pub fn bookmarks_path(&self) -> PathBuf {
        self.bookmarks_file
            .clone()
            .unwrap_or_else(|| self.home_dir.join(BOOKMARKS_FILE_NAME))
    }

    /// The prefix stripped from paths for display, trailing separator
    /// included so stripping leaves a relative-looking path
    pub fn home_prefix(&self) -> String {
        let mut prefix = self.home_dir.display().to_string();
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        prefix
    }
}

/// Get the default home directory for bookmarks
fn default_home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to serialize tests that touch environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Guard that locks env access and saves/restores env vars
    struct EnvGuard<'a> {
        _lock: std::sync::MutexGuard<'a, ()>,
        saved: Vec<(String, Option<String>)>,
    }

    impl<'a> EnvGuard<'a> {
        fn new(vars: &[&str]) -> Self {
            let lock = ENV_MUTEX.lock().unwrap();
            let saved = vars
                .iter()
                .map(|&name| (name.to_string(), env::var(name).ok()))
                .collect();
            // Clear all the vars
            for name in vars {
                env::remove_var(name);
            }
            Self { _lock: lock, saved }
        }
    }

    impl Drop for EnvGuard<'_> {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(name, v),
                    None => env::remove_var(name),
                }
            }
        }
    }

    const ENV_VARS: &[&str] = &["FMARK_HOME_DIR", "FMARK_BOOKMARKS_FILE"];

    #[test]
    fn test_default_config() {
        let _guard = EnvGuard::new(ENV_VARS);

        let config = Config::default();
        assert!(config.home_dir.ends_with("Documents"));
        assert!(config.bookmarks_file.is_none());
    }

    #[test]
    fn test_bookmarks_path_defaults_into_home_dir() {
        let _guard = EnvGuard::new(ENV_VARS);

        let config = Config {
            home_dir: PathBuf::from("/home/me/Documents"),
            bookmarks_file: None,
        };
        assert_eq!(
            config.bookmarks_path(),
            PathBuf::from("/home/me/Documents/.bookmarks.json")
        );
    }

    #[test]
    fn test_bookmarks_file_override() {
        let _guard = EnvGuard::new(ENV_VARS);

        let config = Config {
            home_dir: PathBuf::from("/home/me/Documents"),
            bookmarks_file: Some(PathBuf::from("/data/marks.json")),
        };
        assert_eq!(config.bookmarks_path(), PathBuf::from("/data/marks.json"));
    }

    #[test]
    fn test_home_prefix_has_trailing_separator() {
        let config = Config {
            home_dir: PathBuf::from("/home/me/Documents"),
            bookmarks_file: None,
        };
        assert_eq!(config.home_prefix(), "/home/me/Documents/");
    }

    #[test]
    fn test_env_override_home_dir() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();

        env::set_var("FMARK_HOME_DIR", "/tmp/fmark-test");
        config.apply_env_overrides();

        assert_eq!(config.home_dir, PathBuf::from("/tmp/fmark-test"));
    }

    #[test]
    fn test_env_override_bookmarks_file() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();
        assert!(config.bookmarks_file.is_none());

        env::set_var("FMARK_BOOKMARKS_FILE", "/tmp/marks.json");
        config.apply_env_overrides();
        assert_eq!(config.bookmarks_file, Some(PathBuf::from("/tmp/marks.json")));

        // Empty string clears it
        env::set_var("FMARK_BOOKMARKS_FILE", "");
        config.apply_env_overrides();
        assert!(config.bookmarks_file.is_none());
    }

    #[test]
    fn test_serialization() {
        let _guard = EnvGuard::new(ENV_VARS);

        let config = Config {
            home_dir: PathBuf::from("/home/me/Documents"),
            bookmarks_file: Some(PathBuf::from("/data/marks.json")),
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("home_dir"));
        assert!(toml_str.contains("bookmarks_file"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.home_dir, config.home_dir);
        assert_eq!(parsed.bookmarks_file, config.bookmarks_file);
    }

    #[test]
    fn test_load_from_str() {
        let _guard = EnvGuard::new(ENV_VARS);

        let toml = r#"
            home_dir = "/custom/home"
            bookmarks_file = "/custom/marks.json"
        "#;

        let config = Config::load_from_str(toml).unwrap();
        assert_eq!(config.home_dir, PathBuf::from("/custom/home"));
        assert_eq!(
            config.bookmarks_file,
            Some(PathBuf::from("/custom/marks.json"))
        );
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let _guard = EnvGuard::new(ENV_VARS);

        let path = PathBuf::from("/nonexistent/config.toml");
        let config = Config::load_from_path(&path).unwrap();
        // Should return defaults when file doesn't exist
        assert!(config.bookmarks_file.is_none());
        assert!(config.home_dir.ends_with("Documents"));
    }
}
