//! Client facade: one accessor per resource family.

use url::Url;

use crate::error::UptimeError;
use crate::managers::{CommentManager, IncidentManager, MonitorGroupManager, OncallCalendarManager};
use crate::monitors::MonitorManager;
use crate::resource::{ErrorRules, ResourceManager};
use crate::transport::{ApiTransport, HttpError, ReqwestClient, TransportError};

/// Base URL of the Better Stack Uptime API.
pub const DEFAULT_BASE_URL: &str = "https://uptime.betterstack.com/api/v2/";

/// Better Stack Uptime API client.
///
/// Holds the authenticated transport. Accessors return lightweight
/// managers that borrow it, so entities fetched through them cannot
/// outlive the client.
///
/// ```no_run
/// # async fn demo() -> Result<(), better_uptime::UptimeError> {
/// let client = better_uptime::BetterUptime::new("api-key")?;
/// let mut monitor = client.monitors().get("123").await?;
/// monitor.attributes_mut().check_frequency = 60;
/// monitor.save().await?;
/// # Ok(())
/// # }
/// ```
pub struct BetterUptime<C = ReqwestClient> {
    transport: ApiTransport<C>,
    rules: ErrorRules,
}

impl<C> std::fmt::Debug for BetterUptime<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BetterUptime")
            .field("transport", &self.transport)
            .field("rules", &self.rules)
            .finish()
    }
}

impl BetterUptime {
    /// Creates a client for the public API with a default HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Transport`] if the key cannot be sent in a header
    /// or the HTTP client cannot be built.
    pub fn new(api_key: &str) -> Result<Self, UptimeError> {
        let base_url = Url::parse(DEFAULT_BASE_URL)
            .map_err(|e| TransportError::Http(HttpError::InvalidUrl(e.to_string())))?;
        let client = ReqwestClient::new().map_err(TransportError::Http)?;
        Self::with_client(client, base_url, api_key)
    }
}

impl<C> BetterUptime<C> {
    /// Creates a client with a custom HTTP client and base URL.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Transport`] if the key cannot be sent in a
    /// header or the base URL cannot take path segments.
    pub fn with_client(client: C, base_url: Url, api_key: &str) -> Result<Self, UptimeError> {
        Ok(Self::from_transport(ApiTransport::new(client, base_url, api_key)?))
    }

    /// Wraps an existing transport.
    #[must_use]
    pub fn from_transport(transport: ApiTransport<C>) -> Self {
        Self {
            transport,
            rules: ErrorRules::default(),
        }
    }

    /// Maps 404 on delete to [`UptimeError::NotFound`] for every family.
    #[must_use]
    pub fn with_not_found_on_delete(mut self, enabled: bool) -> Self {
        self.rules.not_found_on_delete = enabled;
        self
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &ApiTransport<C> {
        &self.transport
    }

    /// Status-mapping rules handed to every manager.
    #[must_use]
    pub const fn error_rules(&self) -> ErrorRules {
        self.rules
    }

    fn family<I, S>(&self, path: I, label: &'static str) -> ResourceManager<'_, C>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ResourceManager::new(&self.transport, path, label).with_rules(self.rules)
    }

    /// Monitors.
    #[must_use]
    pub const fn monitors(&self) -> MonitorManager<'_, C> {
        MonitorManager::new(&self.transport, self.rules)
    }

    /// Monitor groups.
    #[must_use]
    pub fn monitor_groups(&self) -> MonitorGroupManager<'_, C> {
        MonitorGroupManager::new(&self.transport, self.rules)
    }

    /// Heartbeats.
    #[must_use]
    pub fn heartbeats(&self) -> ResourceManager<'_, C> {
        self.family(["heartbeats"], "Heartbeat")
    }

    /// Heartbeat groups.
    #[must_use]
    pub fn heartbeat_groups(&self) -> ResourceManager<'_, C> {
        self.family(["heartbeat-groups"], "Heartbeat group")
    }

    /// Incidents.
    #[must_use]
    pub fn incidents(&self) -> IncidentManager<'_, C> {
        IncidentManager::new(&self.transport, self.rules)
    }

    /// Escalation policies.
    #[must_use]
    pub fn escalation_policies(&self) -> ResourceManager<'_, C> {
        self.family(["policies"], "Escalation policy")
    }

    /// Comments of one incident.
    #[must_use]
    pub fn comments(&self, incident_id: &str) -> CommentManager<'_, C> {
        CommentManager::new(&self.transport, incident_id, self.rules)
    }

    /// Status pages.
    #[must_use]
    pub fn status_pages(&self) -> ResourceManager<'_, C> {
        self.family(["status-pages"], "Status page")
    }

    /// Reports of one status page.
    #[must_use]
    pub fn status_page_reports(&self, status_page_id: &str) -> ResourceManager<'_, C> {
        self.family(
            ["status-pages", status_page_id, "status-reports"],
            "Status page report",
        )
    }

    /// Resources shown on one status page.
    #[must_use]
    pub fn status_page_resources(&self, status_page_id: &str) -> ResourceManager<'_, C> {
        self.family(
            ["status-pages", status_page_id, "resources"],
            "Status page resource",
        )
    }

    /// Sections of one status page.
    #[must_use]
    pub fn status_page_sections(&self, status_page_id: &str) -> ResourceManager<'_, C> {
        self.family(
            ["status-pages", status_page_id, "sections"],
            "Status page section",
        )
    }

    /// Updates posted to one status page report.
    #[must_use]
    pub fn status_page_updates(&self, status_page_id: &str, report_id: &str) -> ResourceManager<'_, C> {
        self.family(
            [
                "status-pages",
                status_page_id,
                "status-reports",
                report_id,
                "status-updates",
            ],
            "Status page update",
        )
    }

    /// Metadata records. List with [`MetadataListParams`](crate::managers::MetadataListParams).
    #[must_use]
    pub fn metadata(&self) -> ResourceManager<'_, C> {
        self.family(["metadata"], "Metadata")
    }

    /// On-call calendars.
    #[must_use]
    pub fn oncall_calendars(&self) -> OncallCalendarManager<'_, C> {
        OncallCalendarManager::new(&self.transport, self.rules)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
