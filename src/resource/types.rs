//! Wire shapes shared by all resource families.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One resource object as returned inside the `data` envelope.
///
/// Families without a typed model use the defaults: attributes as a
/// plain JSON object and relationships as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<A = Map<String, Value>, R = Value> {
    /// Server-assigned id
    pub id: String,
    /// Resource type discriminator (`monitor`, `incident`, ...)
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Resource attributes
    pub attributes: A,
    /// Relationships to other resources, when the server sends them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<R>,
}

/// Paging parameters accepted by most list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageParams {
    /// Page number
    pub page: Option<u32>,
    /// Items per page
    pub per_page: Option<u32>,
}

impl PageParams {
    /// Requests a single page with the server's default page size.
    #[must_use]
    pub const fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: None,
        }
    }
}
