//! Stateful monitor entity with differential saves.

use serde::Serialize;
use serde_json::Value;

use super::attributes::{MonitorAttributes, MonitorRelationships};
use super::manager::{MonitorManager, MonitorResource};
use crate::diff::{self, Diff};
use crate::error::UptimeError;
use crate::transport::HttpClient;

#[derive(Serialize)]
struct PausedChange {
    paused: bool,
}

/// One monitor, tracking unsaved local edits.
///
/// The entity keeps two copies of the attributes: a snapshot of what the
/// server last returned, and the live copy the caller edits through
/// [`Monitor::attributes_mut`]. [`Monitor::save`] sends only the fields
/// that differ between the two.
///
/// Entities are created by [`MonitorManager`] and borrow the client's
/// transport. Two entities for the same id are independent views; the
/// last one saved wins on the server.
pub struct Monitor<'a, C> {
    manager: MonitorManager<'a, C>,
    id: String,
    resource_type: String,
    attributes: MonitorAttributes,
    snapshot: MonitorAttributes,
    relationships: Option<MonitorRelationships>,
}

impl<C> Clone for Monitor<'_, C> {
    fn clone(&self) -> Self {
        Self {
            manager: self.manager,
            id: self.id.clone(),
            resource_type: self.resource_type.clone(),
            attributes: self.attributes.clone(),
            snapshot: self.snapshot.clone(),
            relationships: self.relationships.clone(),
        }
    }
}

impl<C> std::fmt::Debug for Monitor<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monitor")
            .field("id", &self.id)
            .field("resource_type", &self.resource_type)
            .field("attributes", &self.attributes)
            .field("dirty", &self.is_dirty())
            .finish_non_exhaustive()
    }
}

impl<'a, C> Monitor<'a, C> {
    pub(crate) fn from_resource(manager: MonitorManager<'a, C>, resource: MonitorResource) -> Self {
        Self {
            manager,
            id: resource.id,
            resource_type: resource.resource_type,
            snapshot: resource.attributes.clone(),
            attributes: resource.attributes,
            relationships: resource.relationships,
        }
    }

    /// Server-assigned id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Resource type discriminator, normally `monitor`.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Live attributes, including unsaved edits.
    #[must_use]
    pub const fn attributes(&self) -> &MonitorAttributes {
        &self.attributes
    }

    /// Mutable live attributes. Edits are sent on the next [`Monitor::save`].
    pub const fn attributes_mut(&mut self) -> &mut MonitorAttributes {
        &mut self.attributes
    }

    /// Attributes as last returned by the server.
    #[must_use]
    pub const fn snapshot(&self) -> &MonitorAttributes {
        &self.snapshot
    }

    /// Relationships as last returned by the server.
    #[must_use]
    pub const fn relationships(&self) -> Option<&MonitorRelationships> {
        self.relationships.as_ref()
    }

    /// Returns true when the live attributes differ from the snapshot.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.attributes != self.snapshot
    }

    /// Fields that [`Monitor::save`] would send.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Attributes`] if the attributes cannot be
    /// serialised.
    pub fn diff(&self) -> Result<Diff, UptimeError> {
        Ok(diff::compute_diff(&self.snapshot, &self.attributes)?)
    }

    /// Sets one live attribute by its wire name.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Attributes`] if the field does not exist or
    /// the value has the wrong type. The live attributes are unchanged
    /// on error.
    pub fn set_attribute(&mut self, field: &str, value: Value) -> Result<(), UptimeError> {
        let mut fields = Diff::new();
        fields.insert(field.to_string(), value);
        self.set_attributes(&fields)
    }

    /// Sets several live attributes at once by their wire names.
    ///
    /// # Errors
    ///
    /// Same as [`Monitor::set_attribute`].
    pub fn set_attributes(&mut self, fields: &Diff) -> Result<(), UptimeError> {
        self.attributes = diff::set_fields(&self.attributes, fields)?;
        Ok(())
    }

    fn replace(&mut self, resource: MonitorResource) {
        self.resource_type = resource.resource_type;
        self.snapshot = resource.attributes.clone();
        self.attributes = resource.attributes;
        self.relationships = resource.relationships;
    }
}

impl<C: HttpClient + Sync> Monitor<'_, C> {
    /// Reloads the monitor, discarding unsaved edits.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::NotFound`] if the monitor no longer exists.
    pub async fn load(&mut self) -> Result<(), UptimeError> {
        let resource = self.manager.fetch(&self.id).await?;
        self.replace(resource);
        Ok(())
    }

    /// Sends the changed fields and adopts the server's response.
    ///
    /// Does nothing when there are no changes. On error the entity is left
    /// as it was, edits included.
    ///
    /// # Errors
    ///
    /// Returns [`UptimeError::Validation`] if the server rejects the change.
    pub async fn save(&mut self) -> Result<(), UptimeError> {
        let changes = self.diff()?;
        if changes.is_empty() {
            tracing::debug!("Monitor {} has no changes to save", self.id);
            return Ok(());
        }

        tracing::debug!(
            "Saving monitor {} fields: {:?}",
            self.id,
            changes.keys().collect::<Vec<_>>()
        );
        let resource = self.manager.patch(&self.id, &changes).await?;
        self.replace(resource);
        Ok(())
    }

    /// Pauses checks for this monitor. Unsaved edits are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if either the update or the reload fails.
    pub async fn pause(&mut self) -> Result<(), UptimeError> {
        self.set_paused(true).await
    }

    /// Resumes checks for this monitor. Unsaved edits are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if either the update or the reload fails.
    pub async fn resume(&mut self) -> Result<(), UptimeError> {
        self.set_paused(false).await
    }

    /// Moves the monitor into a group, or out of any group with `None`,
    /// and saves. Other unsaved edits are saved along with it.
    ///
    /// # Errors
    ///
    /// Same as [`Monitor::save`]. The new group id stays in the live
    /// attributes when the save fails.
    pub async fn move_to_group(&mut self, group_id: Option<String>) -> Result<(), UptimeError> {
        self.attributes.monitor_group_id = group_id;
        self.save().await
    }

    // `paused` is not an attribute; the server derives `status` and
    // `paused_at` from it, so the monitor is re-read after the update.
    async fn set_paused(&mut self, paused: bool) -> Result<(), UptimeError> {
        tracing::debug!("Setting monitor {} paused={paused}", self.id);
        self.manager.patch(&self.id, &PausedChange { paused }).await?;

        let fresh = self.manager.fetch(&self.id).await?;
        let live = diff::reconcile_after_refresh(&self.snapshot, &fresh.attributes, &self.attributes)?;

        self.replace(fresh);
        self.attributes = live;
        Ok(())
    }
}
