//! Configuration file support for persistent defaults.
//!
//! This module loads defaults from a TOML file located at
//! `~/.config/gobuster-cmd/config.toml` (or the platform-specific
//! equivalent). The file is only ever read; values from it serve as defaults
//! that can be overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! quote_style = "shell"
//!
//! [scan]
//! wordlist_preset = "seclists-common"
//! extensions = "php,html,txt"
//! threads = 40
//! timeout = 15
//!
//! [filtering]
//! show_codes = "200,204,301,302,307,401,403"
//! hide_codes = "404,500"
//!
//! [output]
//! full_url = true
//! no_progress = true
//! output_file = "~/loot/gobuster.txt"
//!
//! [network]
//! skip_ssl = true
//! user_agent = "Mozilla/5.0"
//! headers = ["X-Bug-Bounty: me"]
//! proxy = "http://127.0.0.1:8080"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::compiler::QuoteStyle;
use crate::wordlist::WordlistPreset;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default quoting policy (`"shell"` or `"display"`)
    pub quote_style: Option<QuoteStyle>,

    /// Wordlist and performance options
    #[serde(default)]
    pub scan: FileScanConfig,

    /// Status code filters
    #[serde(default)]
    pub filtering: FileFilterConfig,

    /// Output options
    #[serde(default)]
    pub output: FileOutputConfig,

    /// Network options
    #[serde(default)]
    pub network: FileNetworkConfig,
}

/// Wordlist and performance options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileScanConfig {
    /// Custom wordlist path, takes precedence over `wordlist_preset`
    pub wordlist: Option<PathBuf>,

    /// One of the predefined wordlists (e.g., `"dirb-common"`)
    pub wordlist_preset: Option<WordlistPreset>,

    /// Comma-separated extensions (e.g., `"php,html"`)
    pub extensions: Option<String>,

    /// Number of gobuster threads
    pub threads: Option<i64>,

    /// Request timeout in seconds
    pub timeout: Option<i64>,
}

/// Status code filters from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileFilterConfig {
    pub show_codes: Option<String>,

    pub hide_codes: Option<String>,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    /// Print full URLs (`-e`)
    pub full_url: Option<bool>,

    /// Quiet mode (`-q`)
    pub quiet: Option<bool>,

    /// Hide progress (`-z`)
    pub no_progress: Option<bool>,

    /// Where gobuster should write its results (`-o`)
    pub output_file: Option<PathBuf>,
}

/// Network options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileNetworkConfig {
    /// Follow redirects (`-r`)
    pub follow_redirects: Option<bool>,

    /// Skip TLS verification (`-k`)
    pub skip_ssl: Option<bool>,

    pub user_agent: Option<String>,

    /// Extra headers, one `Name: value` per entry
    pub headers: Option<Vec<String>>,

    pub proxy: Option<String>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
///
/// # Examples
///
/// ```
/// # use std::path::PathBuf;
/// # use gobuster_cmd::config::file::expand_tilde;
/// let absolute = PathBuf::from("/absolute/path");
/// assert_eq!(expand_tilde(&absolute), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/gobuster-cmd/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gobuster-cmd").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// See [`FileConfig::from_path`].
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::from_path(&path)
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid TOML or unexpected fields
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        tracing::debug!(path = %path.display(), "loaded config file");

        Ok(config)
    }
}
