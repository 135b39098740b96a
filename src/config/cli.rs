//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use super::defaults::API_KEY_ENV;

/// better-uptime: Better Stack Uptime command-line client
///
/// Lists and edits monitors, monitor groups and incidents through the
/// Better Stack Uptime REST API.
#[derive(Debug, Parser)]
#[command(name = "better-uptime")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// API token (falls back to the environment, then the config file)
    #[arg(long = "api-key", env = API_KEY_ENV, hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for better-uptime
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "better-uptime.toml")]
        output: PathBuf,
    },

    /// Manage monitors
    Monitors {
        #[command(subcommand)]
        action: MonitorAction,
    },

    /// Inspect monitor groups
    #[command(name = "monitor-groups")]
    MonitorGroups {
        #[command(subcommand)]
        action: MonitorGroupAction,
    },

    /// Inspect and act on incidents
    Incidents {
        #[command(subcommand)]
        action: IncidentAction,
    },
}

/// Monitor operations.
#[derive(Debug, Subcommand)]
pub enum MonitorAction {
    /// List monitors
    List {
        /// Only monitors checking this URL
        #[arg(long)]
        url: Option<String>,
        /// Only monitors with this pronounceable name
        #[arg(long)]
        name: Option<String>,
        /// Page number
        #[arg(long)]
        page: Option<u32>,
        /// Page size
        #[arg(long = "per-page")]
        per_page: Option<u32>,
    },
    /// Show one monitor
    Get { id: String },
    /// Pause checks for a monitor
    Pause { id: String },
    /// Resume checks for a monitor
    Resume { id: String },
    /// Move a monitor into a group, or out of any group
    Move {
        id: String,
        /// Target group id; omit to remove the monitor from its group
        #[arg(long)]
        group: Option<String>,
    },
    /// Change attributes and save only what differs
    Set {
        id: String,
        /// Assignments such as `check_frequency=60` or `paused=true`
        #[arg(value_name = "FIELD=VALUE", required = true, value_parser = parse_assignment)]
        assignments: Vec<(String, Value)>,
    },
    /// Delete a monitor
    Delete { id: String },
}

/// Monitor group operations.
#[derive(Debug, Subcommand)]
pub enum MonitorGroupAction {
    /// List monitor groups
    List {
        /// Page number
        #[arg(long)]
        page: Option<u32>,
    },
    /// List the monitors of one group
    Monitors { id: String },
}

/// Incident operations.
#[derive(Debug, Subcommand)]
pub enum IncidentAction {
    /// List incidents
    List {
        /// Page number
        #[arg(long)]
        page: Option<u32>,
        /// Page size
        #[arg(long = "per-page")]
        per_page: Option<u32>,
    },
    /// Acknowledge an incident
    Acknowledge {
        id: String,
        /// Name or email recorded as the acknowledger
        #[arg(long)]
        by: Option<String>,
    },
    /// Resolve an incident
    Resolve {
        id: String,
        /// Name or email recorded as the resolver
        #[arg(long)]
        by: Option<String>,
    },
}

/// Parses `field=value`; the value is read as JSON, falling back to a plain string.
fn parse_assignment(s: &str) -> Result<(String, Value), String> {
    let (field, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{s}'"))?;

    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{s}'"));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((field.to_string(), value))
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Fallible variant of [`Cli::parse_from_iter`].
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags or malformed values.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
