//! better-uptime: typed client for the Better Stack Uptime REST API
//!
//! A library for managing monitors, incidents, status pages and the other
//! Uptime resources. Monitors are stateful entities: local edits are
//! tracked against the last server snapshot and [`Monitor::save`] sends
//! only the fields that changed.

pub mod client;
pub mod config;
pub mod diff;
pub mod error;
pub mod managers;
pub mod monitors;
pub mod resource;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use client::{BetterUptime, DEFAULT_BASE_URL};
pub use error::{UptimeError, ValidationErrors};
pub use monitors::{Monitor, MonitorAttributes, MonitorKind, MonitorStatus, NewMonitor};
pub use resource::{ErrorRules, PageParams, Resource, ResourceManager};
