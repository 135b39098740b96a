//! Monitor groups.

use std::ops::Deref;

use crate::error::UptimeError;
use crate::monitors::{Monitor, MonitorManager, MonitorResource};
use crate::resource::{ErrorRules, ResourceManager};
use crate::transport::{ApiTransport, HttpClient};

/// Operations on `monitor-groups`.
///
/// The CRUD operations come from the wrapped [`ResourceManager`];
/// [`MonitorGroupManager::monitors`] lists the members of a group as
/// [`Monitor`] entities.
pub struct MonitorGroupManager<'a, C> {
    resources: ResourceManager<'a, C>,
}

impl<C> std::fmt::Debug for MonitorGroupManager<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorGroupManager")
            .field("resources", &self.resources)
            .finish()
    }
}

impl<'a, C> MonitorGroupManager<'a, C> {
    /// Creates a manager over `transport`.
    #[must_use]
    pub fn new(transport: &'a ApiTransport<C>, rules: ErrorRules) -> Self {
        Self {
            resources: ResourceManager::new(transport, ["monitor-groups"], "Monitor group")
                .with_rules(rules),
        }
    }
}

impl<'a, C> Deref for MonitorGroupManager<'a, C> {
    type Target = ResourceManager<'a, C>;

    fn deref(&self) -> &Self::Target {
        &self.resources
    }
}

impl<'a, C: HttpClient + Sync> MonitorGroupManager<'a, C> {
    /// Lists the monitors in a group.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::NotFound`] naming the group on 404.
    pub async fn monitors(&self, group_id: &str) -> Result<Vec<Monitor<'a, C>>, UptimeError> {
        let resources: Vec<MonitorResource> = self
            .resources
            .fetch_related(group_id, "monitors", &())
            .await?;

        let monitors = MonitorManager::new(self.resources.transport(), self.resources.rules());
        Ok(resources.into_iter().map(|r| monitors.wrap(r)).collect())
    }
}
