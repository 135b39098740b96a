//! Comments on one incident.

use serde::Serialize;

use crate::error::UptimeError;
use crate::resource::{ErrorRules, PageParams, Resource, ResourceManager};
use crate::transport::{ApiTransport, HttpClient};

#[derive(Serialize)]
struct Content<'b> {
    content: &'b str,
}

/// Operations on `incidents/{incident}/comments`.
///
/// Comments are plain text; only comments created through the API can be
/// updated.
pub struct CommentManager<'a, C> {
    resources: ResourceManager<'a, C>,
}

impl<C> std::fmt::Debug for CommentManager<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentManager")
            .field("resources", &self.resources)
            .finish()
    }
}

impl<'a, C> CommentManager<'a, C> {
    /// Creates a manager for the comments of `incident_id`.
    #[must_use]
    pub fn new(transport: &'a ApiTransport<C>, incident_id: &str, rules: ErrorRules) -> Self {
        Self {
            resources: ResourceManager::new(transport, ["incidents", incident_id, "comments"], "Comment")
                .with_rules(rules),
        }
    }
}

impl<C: HttpClient + Sync> CommentManager<'_, C> {
    /// Lists the incident's comments.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Transport`] on any failure.
    pub async fn list(&self) -> Result<Vec<Resource>, UptimeError> {
        self.resources.list(&PageParams::default()).await
    }

    /// Fetches one comment.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::NotFound`] on 404.
    pub async fn get(&self, id: &str) -> Result<Resource, UptimeError> {
        self.resources.get(id).await
    }

    /// Posts a comment.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Validation`] on 422.
    pub async fn create(&self, content: &str) -> Result<Resource, UptimeError> {
        self.resources.create(&Content { content }).await
    }

    /// Replaces the text of a comment.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Validation`] on 422.
    pub async fn update(&self, id: &str, content: &str) -> Result<Resource, UptimeError> {
        self.resources.update(id, &Content { content }).await
    }

    /// Permanently deletes a comment.
    ///
    /// # Errors
    ///
    /// Returns a status error on failure.
    pub async fn delete(&self, id: &str) -> Result<bool, UptimeError> {
        self.resources.delete(id).await
    }
}
