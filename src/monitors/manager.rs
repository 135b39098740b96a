//! Monitor collection operations.

use serde::Serialize;

use super::attributes::{MonitorAttributes, MonitorRelationships};
use super::entity::Monitor;
use super::new_monitor::NewMonitor;
use super::reports::{AvailabilitySummary, ResponseTimes, SlaParams};
use crate::error::UptimeError;
use crate::resource::{ErrorRules, Resource, ResourceManager};
use crate::transport::{ApiTransport, HttpClient};

/// A monitor resource object as it comes off the wire.
pub type MonitorResource = Resource<MonitorAttributes, MonitorRelationships>;

/// Filters for listing monitors. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonitorListParams {
    /// Only monitors with this exact URL
    pub url: Option<String>,
    /// Only monitors with this pronounceable name
    pub pronounceable_name: Option<String>,
    /// Page number, starting at 1
    pub page: Option<u32>,
    /// Maximum 250, server default 50
    pub per_page: Option<u32>,
}

/// Operations on the `monitors` collection.
///
/// Every monitor it returns is a [`Monitor`] entity holding a copy of this
/// handle, so the entity can load and save itself later.
pub struct MonitorManager<'a, C> {
    transport: &'a ApiTransport<C>,
    rules: ErrorRules,
}

impl<C> Clone for MonitorManager<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for MonitorManager<'_, C> {}

impl<C> std::fmt::Debug for MonitorManager<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorManager")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl<'a, C> MonitorManager<'a, C> {
    /// Label used in `NotFound` errors.
    pub const LABEL: &'static str = "Monitor";

    /// Collection path.
    pub const PATH: &'static str = "monitors";

    /// Creates a manager over `transport`.
    #[must_use]
    pub const fn new(transport: &'a ApiTransport<C>, rules: ErrorRules) -> Self {
        Self { transport, rules }
    }

    fn resources(self) -> ResourceManager<'a, C, MonitorResource> {
        ResourceManager::new(self.transport, [Self::PATH], Self::LABEL).with_rules(self.rules)
    }

    /// Wraps a fetched resource into an entity bound to this manager.
    pub(crate) fn wrap(self, resource: MonitorResource) -> Monitor<'a, C> {
        Monitor::from_resource(self, resource)
    }
}

impl<'a, C: HttpClient + Sync> MonitorManager<'a, C> {
    /// Lists monitors.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Transport`] on any failure.
    pub async fn get_all(&self, params: &MonitorListParams) -> Result<Vec<Monitor<'a, C>>, UptimeError> {
        let resources = self.resources().list(params).await?;
        Ok(resources.into_iter().map(|r| self.wrap(r)).collect())
    }

    /// Fetches one monitor.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::NotFound`] on 404.
    pub async fn get(&self, id: &str) -> Result<Monitor<'a, C>, UptimeError> {
        Ok(self.wrap(self.fetch(id).await?))
    }

    /// Creates a monitor.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Validation`] on 422.
    pub async fn create(&self, monitor: &NewMonitor) -> Result<Monitor<'a, C>, UptimeError> {
        let resource = self.resources().create(monitor).await?;
        tracing::debug!("Created monitor {}", resource.id);
        Ok(self.wrap(resource))
    }

    /// Sends a partial update; only the given fields change.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Validation`] on 422.
    pub async fn update<B: Serialize + ?Sized + Sync>(
        &self,
        id: &str,
        changes: &B,
    ) -> Result<Monitor<'a, C>, UptimeError> {
        Ok(self.wrap(self.patch(id, changes).await?))
    }

    /// Permanently deletes a monitor.
    ///
    /// # Errors
    ///
    /// Returns a status error on 404 unless
    /// [`ErrorRules::not_found_on_delete`] is set.
    pub async fn delete(&self, id: &str) -> Result<bool, UptimeError> {
        self.resources().delete(id).await
    }

    /// Response times of the last 24 hours, per region.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::NotFound`] on 404.
    pub async fn response_times(&self, id: &str) -> Result<Resource<ResponseTimes>, UptimeError> {
        self.resources().fetch_related(id, "response-times", &()).await
    }

    /// Availability summary, optionally limited to a date range.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::NotFound`] on 404.
    pub async fn availability_summary(
        &self,
        id: &str,
        params: &SlaParams,
    ) -> Result<Resource<AvailabilitySummary>, UptimeError> {
        self.resources().fetch_related(id, "sla", params).await
    }

    pub(crate) async fn fetch(&self, id: &str) -> Result<MonitorResource, UptimeError> {
        self.resources().get(id).await
    }

    pub(crate) async fn patch<B: Serialize + ?Sized + Sync>(
        &self,
        id: &str,
        changes: &B,
    ) -> Result<MonitorResource, UptimeError> {
        self.resources().update(id, changes).await
    }
}
