//! Configuration management for quill.
//!
//! Loads configuration from ${QUILL_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable that overrides `api_base_url`.
pub const API_URL_ENV: &str = "QUILL_API_URL";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for quill configuration and data directories.
    //!
    //! QUILL_HOME resolution order:
    //! 1. QUILL_HOME environment variable (if set)
    //! 2. ~/.config/quill (default)

    use std::path::PathBuf;

    /// Returns the quill home directory.
    pub fn quill_home() -> PathBuf {
        if let Ok(home) = std::env::var("QUILL_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("quill")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        quill_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        quill_home().join("logs")
    }
}

/// Display settings for list pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Characters of content previewed on the home page.
    pub home_preview_chars: usize,
    /// Characters of content previewed on the profile page.
    pub profile_preview_chars: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            home_preview_chars: 150,
            profile_preview_chars: 100,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the blog API.
    pub api_base_url: String,

    /// Per-request timeout in seconds (0 disables)
    pub request_timeout_secs: u64,

    /// Re-fetch the post list after a post is created.
    pub refetch_after_create: bool,

    /// Log filter directive (e.g. "info", "quill_core=debug").
    pub log_level: String,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the API base URL with precedence: explicit override > env > config.
    ///
    /// # Errors
    /// Returns an error if the chosen URL is not a valid absolute URL.
    pub fn resolve_base_url(&self, override_url: Option<&str>) -> Result<Url> {
        let env_url = std::env::var(API_URL_ENV).ok();
        let candidates = [override_url, env_url.as_deref(), Some(self.api_base_url.as_str())];
        let raw = candidates
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(Self::DEFAULT_API_BASE_URL);

        Url::parse(raw).with_context(|| format!("Invalid API base URL: {raw}"))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.request_timeout_secs))
        }
    }

    /// Saves only the api_base_url field to the config file.
    ///
    /// # Errors
    /// Returns an error if the config cannot be read, parsed or written.
    pub fn save_base_url(url: &str) -> Result<()> {
        Self::save_base_url_to(&paths::config_path(), url)
    }

    /// Saves only the api_base_url field to a specific config file path.
    ///
    /// Creates the file from the default template if it doesn't exist.
    /// An existing file is edited in place, keeping its comments and layout.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the file cannot be written.
    pub fn save_base_url_to(path: &Path, url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let url = url.trim();
        Url::parse(url).with_context(|| format!("Invalid API base URL: {url}"))?;

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        doc["api_base_url"] = value(url);

        Self::write_config(path, &doc.to_string())
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content atomically (temp file + rename).
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            refetch_after_create: true,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
            display: DisplayConfig::default(),
        }
    }
}
