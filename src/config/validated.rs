//! Validated configuration after merging CLI, environment and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// Neither `Debug` nor `Display` print the API key.
pub struct ValidatedConfig {
    /// API token (required)
    pub api_key: String,

    /// API base URL, guaranteed to accept path segments
    pub base_url: Url,

    /// Per-request timeout
    pub timeout: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ base_url: {}, timeout: {}s, api_key: <redacted> }}",
            self.base_url,
            self.timeout.as_secs(),
        )
    }
}

impl fmt::Debug for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments (including the `BETTER_UPTIME_API_KEY` environment
    /// variable, which clap folds into `--api-key`) take precedence over
    /// TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API key is missing or empty
    /// - The base URL is invalid or cannot take path segments
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: Self::resolve_api_key(cli, toml)?,
            base_url: Self::resolve_base_url(cli, toml)?,
            timeout: Self::resolve_timeout(cli, toml)?,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and a config file.
    ///
    /// Uses `--config` if given, otherwise the per-user config file
    /// (see [`default_config_path`]) when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with_fallback(cli, default_config_path().as_deref())
    }

    /// Like [`ValidatedConfig::load`], with an explicit fallback file.
    ///
    /// The fallback is only read if it exists; an explicit `--config`
    /// path must exist.
    ///
    /// # Errors
    ///
    /// Same as [`ValidatedConfig::load`].
    pub fn load_with_fallback(cli: &Cli, fallback: Option<&Path>) -> Result<Self, ConfigError> {
        let toml = match (&cli.config, fallback) {
            (Some(path), _) => Some(TomlConfig::load(path)?),
            (None, Some(path)) if path.is_file() => Some(TomlConfig::load(path)?),
            (None, _) => None,
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_api_key(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.api_key
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.key.as_deref()))
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or(ConfigError::MissingApiKey)
    }

    fn resolve_base_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let url_str = cli
            .base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.base_url.as_deref()))
            .unwrap_or(defaults::BASE_URL);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidBaseUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: url_str.to_string(),
                reason: "cannot be used as a base URL".to_string(),
            });
        }

        Ok(url)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.api.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Per-user configuration file, e.g. `~/.config/better-uptime/config.toml`.
///
/// Returns `None` if the platform has no config directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(defaults::CONFIG_DIR_NAME)
            .join(defaults::CONFIG_FILE_NAME)
    })
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
