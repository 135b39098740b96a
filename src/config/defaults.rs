//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

pub use crate::client::DEFAULT_BASE_URL as BASE_URL;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "BETTER_UPTIME_API_KEY";

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Directory under the platform config dir searched for `config.toml`.
pub const CONFIG_DIR_NAME: &str = "better-uptime";

/// File name of the implicit configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
