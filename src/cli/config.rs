//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::sync::UpdateMethod;

/// Server used when nothing else is configured.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Base URL of the notes server
    pub server: Option<String>,

    /// File holding the `Cookie` header string (session and CSRF cookies)
    pub cookie_file: Option<PathBuf>,

    /// Verb used when saving an edited note
    #[serde(default)]
    pub update_method: UpdateMethod,

    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/noteform/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("noteform")
            .join("config.toml")
    }

    /// Resolve the server base URL.
    ///
    /// Precedence order:
    /// 1. CLI `--server` argument
    /// 2. $NOTEFORM_SERVER environment variable
    /// 3. Config file `server` setting
    /// 4. `http://127.0.0.1:8000`
    pub fn server(&self, cli_server: Option<&String>) -> String {
        cli_server
            .cloned()
            .or_else(|| std::env::var("NOTEFORM_SERVER").ok())
            .or_else(|| self.server.clone())
            .unwrap_or_else(|| DEFAULT_SERVER.to_string())
    }

    /// Resolve the cookie file.
    ///
    /// Precedence order:
    /// 1. CLI `--cookie-file` argument
    /// 2. $NOTEFORM_COOKIE_FILE environment variable
    /// 3. Config file `cookie_file` setting
    pub fn cookie_file(&self, cli_file: Option<&PathBuf>) -> Option<PathBuf> {
        cli_file
            .cloned()
            .or_else(|| std::env::var("NOTEFORM_COOKIE_FILE").ok().map(PathBuf::from))
            .or_else(|| self.cookie_file.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
