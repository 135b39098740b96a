//! Request body for creating a monitor.

use serde::Serialize;

use super::attributes::{HttpMethod, MonitorKind, RequestHeader};

/// Body of a create-monitor request.
///
/// `url` and the check type are required. Every other field is left out
/// of the JSON when unset, so the server applies its own default.
/// Optional fields mean the same as on
/// [`MonitorAttributes`](super::MonitorAttributes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMonitor {
    /// Checked URL or host
    pub url: String,
    /// Check type and its required fields
    #[serde(flatten)]
    pub kind: MonitorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronounceable_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_frequency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_wait: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_method: Option<HttpMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<Vec<RequestHeader>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_expiration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_expiration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_redirects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember_cookies: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playwright_script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_password: Option<String>,
}

impl NewMonitor {
    /// Creates a body with only the required fields set.
    #[must_use]
    pub fn new(url: impl Into<String>, kind: MonitorKind) -> Self {
        Self {
            url: url.into(),
            kind,
            pronounceable_name: None,
            monitor_group_id: None,
            verify_ssl: None,
            check_frequency: None,
            call: None,
            email: None,
            sms: None,
            push: None,
            team_wait: None,
            http_method: None,
            request_timeout: None,
            recovery_period: None,
            request_headers: None,
            request_body: None,
            ssl_expiration: None,
            domain_expiration: None,
            regions: None,
            confirmation_period: None,
            follow_redirects: None,
            policy_id: None,
            remember_cookies: None,
            playwright_script: None,
            maintenance_from: None,
            maintenance_to: None,
            maintenance_timezone: None,
            auth_username: None,
            auth_password: None,
        }
    }

    /// Sets the pronounceable name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.pronounceable_name = Some(name.into());
        self
    }

    /// Sets the check interval in seconds.
    #[must_use]
    pub const fn with_check_frequency(mut self, seconds: u32) -> Self {
        self.check_frequency = Some(seconds);
        self
    }

    /// Places the monitor in a monitor group.
    #[must_use]
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.monitor_group_id = Some(group_id.into());
        self
    }
}
