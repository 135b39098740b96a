//! Typed monitor attributes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current state of a monitor as reported by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorStatus {
    /// The monitor was paused
    Paused,
    /// Just created, waiting for the first check
    #[default]
    Pending,
    /// Inside its daily maintenance window
    Maintenance,
    /// Checks are passing
    Up,
    /// Back up, but the recovery period has not passed yet
    Validating,
    /// Checks are failing
    Down,
}

/// HTTP method used for the check request.
///
/// Serialised in lowercase; uppercase input is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    #[default]
    #[serde(alias = "GET")]
    Get,
    #[serde(alias = "HEAD")]
    Head,
    #[serde(alias = "POST")]
    Post,
    #[serde(alias = "PUT")]
    Put,
    #[serde(alias = "PATCH")]
    Patch,
}

/// Custom header sent with the check request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestHeader {
    /// Server-generated id; leave unset when adding a header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Header name
    pub name: String,
    /// Header value
    pub value: String,
}

impl RequestHeader {
    /// Creates a header without an id.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Check type, discriminated by `monitor_type`, with the fields only that
/// type uses.
///
/// Ports are strings; mail monitors accept comma-separated lists such as
/// `"25,465"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "monitor_type", rename_all = "snake_case")]
pub enum MonitorKind {
    /// Up while the URL answers with a 2xx status
    Status,
    /// ICMP ping of the host
    Ping,
    /// Up while the status is one of the listed codes
    ExpectedStatusCode {
        /// Accepted status codes
        #[serde(default)]
        expected_status_codes: Vec<u16>,
    },
    /// Body must contain a keyword
    Keyword {
        /// An incident is opened when this keyword is missing
        required_keyword: String,
    },
    /// Body must not contain a keyword
    KeywordAbsence {
        /// An incident is opened when this keyword is present
        required_keyword: String,
    },
    /// TCP connect check
    Tcp {
        /// Target port
        port: String,
    },
    /// UDP check expecting a keyword in the reply
    Udp {
        /// Target port
        port: String,
        /// Keyword the reply must contain
        required_keyword: String,
    },
    /// SMTP server check
    Smtp {
        /// Port or comma-separated ports
        port: String,
    },
    /// POP3 server check
    Pop {
        /// Port or comma-separated ports
        port: String,
    },
    /// IMAP server check
    Imap {
        /// Port or comma-separated ports
        port: String,
    },
}

impl MonitorKind {
    /// Wire value of the `monitor_type` discriminator.
    #[must_use]
    pub const fn monitor_type(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Ping => "ping",
            Self::ExpectedStatusCode { .. } => "expected_status_code",
            Self::Keyword { .. } => "keyword",
            Self::KeywordAbsence { .. } => "keyword_absence",
            Self::Tcp { .. } => "tcp",
            Self::Udp { .. } => "udp",
            Self::Smtp { .. } => "smtp",
            Self::Pop { .. } => "pop",
            Self::Imap { .. } => "imap",
        }
    }
}

/// Attributes of one monitor.
///
/// Nullable fields are `Option`s; fields missing from a response take
/// their default. Durations are in seconds and timestamps are kept as
/// the ISO-8601 strings the server sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)] // mirrors the wire format
pub struct MonitorAttributes {
    /// Checked URL or host
    pub url: String,
    /// Name read out on phone alerts
    #[serde(default)]
    pub pronounceable_name: Option<String>,
    /// Group the monitor belongs to
    #[serde(default)]
    pub monitor_group_id: Option<String>,
    /// Time of the most recent check
    #[serde(default)]
    pub last_checked_at: Option<String>,
    /// Current state; read-only
    #[serde(default)]
    pub status: MonitorStatus,
    /// Fail the check on an invalid certificate
    #[serde(default)]
    pub verify_ssl: bool,
    /// Seconds between checks
    #[serde(default)]
    pub check_frequency: u32,
    /// Phone-call the on-call person on incidents
    #[serde(default)]
    pub call: bool,
    /// Email the on-call person on incidents
    #[serde(default)]
    pub email: bool,
    /// Text the on-call person on incidents
    #[serde(default)]
    pub sms: bool,
    /// Push-notify the on-call person on incidents
    #[serde(default)]
    pub push: bool,
    /// Seconds before escalating to the whole team; `None` disables it
    #[serde(default)]
    pub team_wait: Option<u32>,
    /// Method of the check request
    #[serde(default)]
    pub http_method: HttpMethod,
    /// Seconds to wait for a check response
    #[serde(default)]
    pub request_timeout: u32,
    /// Seconds the monitor must stay up before an incident auto-resolves
    #[serde(default)]
    pub recovery_period: u32,
    /// Extra headers sent with the check request
    #[serde(default)]
    pub request_headers: Vec<RequestHeader>,
    /// Body sent with POST, PUT and PATCH checks
    #[serde(default)]
    pub request_body: Option<String>,
    /// When the monitor was paused
    #[serde(default)]
    pub paused_at: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last modification time
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Days of warning before certificate expiry; `None` disables the check
    #[serde(default)]
    pub ssl_expiration: Option<u32>,
    /// Days of warning before domain expiry; `None` disables the check
    #[serde(default)]
    pub domain_expiration: Option<u32>,
    /// Check regions (`us`, `eu`, `as`, `au`)
    #[serde(default)]
    pub regions: Option<Vec<String>>,
    /// Seconds a failure must persist before an incident opens
    #[serde(default)]
    pub confirmation_period: u32,
    /// Follow HTTP redirects
    #[serde(default)]
    pub follow_redirects: bool,
    /// Escalation policy; `None` uses the team default
    #[serde(default)]
    pub policy_id: Option<String>,
    /// Keep cookies across redirects
    #[serde(default)]
    pub remember_cookies: bool,
    /// Script for Playwright-based checks
    #[serde(default)]
    pub playwright_script: Option<String>,
    /// Daily maintenance window start, e.g. `01:00:00`
    #[serde(default)]
    pub maintenance_from: Option<String>,
    /// Daily maintenance window end
    #[serde(default)]
    pub maintenance_to: Option<String>,
    /// Time zone of the maintenance window
    #[serde(default)]
    pub maintenance_timezone: Option<String>,
    /// HTTP basic auth user
    #[serde(default)]
    pub auth_username: Option<String>,
    /// HTTP basic auth password
    #[serde(default)]
    pub auth_password: Option<String>,
    /// Check type and its type-specific fields
    #[serde(flatten)]
    pub kind: MonitorKind,
}

/// Relationship to the escalation policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyRelationship {
    /// Escalation policy id, or the linkage object when the server sends one
    #[serde(default)]
    pub data: Option<Value>,
}

/// Read-only relationships block of a monitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorRelationships {
    /// Escalation policy link
    #[serde(default)]
    pub policy: PolicyRelationship,
}
