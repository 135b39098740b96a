//! Incidents and their lifecycle actions.

use std::ops::Deref;

use serde::Serialize;

use crate::error::UptimeError;
use crate::resource::{ErrorRules, Resource, ResourceManager};
use crate::transport::{ApiTransport, HttpClient};

#[derive(Serialize)]
struct Acknowledge<'b> {
    #[serde(skip_serializing_if = "Option::is_none")]
    acknowledged_by: Option<&'b str>,
}

#[derive(Serialize)]
struct Resolve<'b> {
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved_by: Option<&'b str>,
}

/// Operations on `incidents`.
///
/// CRUD comes from the wrapped [`ResourceManager`]; the timeline and the
/// acknowledge/resolve actions are added here.
pub struct IncidentManager<'a, C> {
    resources: ResourceManager<'a, C>,
}

impl<C> std::fmt::Debug for IncidentManager<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IncidentManager")
            .field("resources", &self.resources)
            .finish()
    }
}

impl<'a, C> IncidentManager<'a, C> {
    /// Creates a manager over `transport`.
    #[must_use]
    pub fn new(transport: &'a ApiTransport<C>, rules: ErrorRules) -> Self {
        Self {
            resources: ResourceManager::new(transport, ["incidents"], "Incident").with_rules(rules),
        }
    }
}

impl<'a, C> Deref for IncidentManager<'a, C> {
    type Target = ResourceManager<'a, C>;

    fn deref(&self) -> &Self::Target {
        &self.resources
    }
}

impl<C: HttpClient + Sync> IncidentManager<'_, C> {
    /// Timeline items of an incident.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::NotFound`] on 404.
    pub async fn timeline(&self, id: &str) -> Result<Vec<Resource>, UptimeError> {
        self.resources.fetch_related(id, "timeline", &()).await
    }

    /// Acknowledges an ongoing incident, stopping further escalation.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Validation`] on 422.
    pub async fn acknowledge(&self, id: &str, acknowledged_by: Option<&str>) -> Result<Resource, UptimeError> {
        tracing::debug!("Acknowledging incident {id}");
        self.resources
            .act(id, "acknowledge", &Acknowledge { acknowledged_by })
            .await
    }

    /// Resolves an ongoing incident.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Validation`] on 422.
    pub async fn resolve(&self, id: &str, resolved_by: Option<&str>) -> Result<Resource, UptimeError> {
        tracing::debug!("Resolving incident {id}");
        self.resources
            .act(id, "resolve", &Resolve { resolved_by })
            .await
    }
}
