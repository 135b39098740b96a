//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Why a configuration could not be loaded, validated or written.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API key in any source, or only a blank one.
    #[error(
        "No API token configured. Use --api-key, set BETTER_UPTIME_API_KEY, or set api.key in the config file"
    )]
    MissingApiKey,

    /// The API base URL does not parse or cannot take path segments.
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// URL as given
        url: String,
        /// Parser message or the structural problem
        reason: String,
    },

    /// A request timeout of zero seconds.
    #[error("Request timeout must be at least one second")]
    ZeroTimeout,

    /// The config file could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// `init` could not write the template.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path that was written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Whether generating a template with `init` would help.
    #[must_use]
    pub const fn suggests_init(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::FileRead { .. })
    }
}
