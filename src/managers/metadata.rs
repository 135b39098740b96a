//! Metadata list filters.

use serde::Serialize;

/// Filters for listing metadata records by owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetadataListParams {
    /// Id of the owning resource
    pub owner_id: Option<String>,
    /// Type of the owning resource, e.g. `Monitor`
    pub owner_type: Option<String>,
    /// Page number, starting at 1
    pub page: Option<u32>,
}
