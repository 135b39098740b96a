//! Configuration layer for the better-uptime binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **Environment** - `BETTER_UPTIME_API_KEY` for the API key
//! 3. **TOML config file** - `--config`, else the per-user file if present
//! 4. **Built-in defaults** - Base URL and timeout
//!
//! The API key has no default and must come from one of the first three sources.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, IncidentAction, MonitorAction, MonitorGroupAction};
pub use error::ConfigError;
pub use toml::{ApiSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, default_config_path, write_default_config};
