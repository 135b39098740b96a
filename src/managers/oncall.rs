//! On-call calendars (read-only).

use serde::Serialize;

use crate::error::UptimeError;
use crate::resource::{ErrorRules, PageParams, Resource, ResourceManager};
use crate::transport::{ApiTransport, HttpClient};

#[derive(Serialize)]
struct OnDate<'b> {
    date: Option<&'b str>,
}

/// Read-only access to `on-calls`.
pub struct OncallCalendarManager<'a, C> {
    resources: ResourceManager<'a, C>,
}

impl<C> std::fmt::Debug for OncallCalendarManager<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OncallCalendarManager")
            .field("resources", &self.resources)
            .finish()
    }
}

impl<'a, C> OncallCalendarManager<'a, C> {
    /// Creates a manager over `transport`.
    #[must_use]
    pub fn new(transport: &'a ApiTransport<C>, rules: ErrorRules) -> Self {
        Self {
            resources: ResourceManager::new(transport, ["on-calls"], "On-call calendar").with_rules(rules),
        }
    }
}

impl<C: HttpClient + Sync> OncallCalendarManager<'_, C> {
    /// Lists on-call calendars.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Transport`] on any failure.
    pub async fn list(&self, params: &PageParams) -> Result<Vec<Resource>, UptimeError> {
        self.resources.list(params).await
    }

    /// Fetches a calendar, optionally as of a date (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::NotFound`] on 404.
    pub async fn get(&self, id: &str, date: Option<&str>) -> Result<Resource, UptimeError> {
        self.resources.get_with(id, &OnDate { date }).await
    }
}
