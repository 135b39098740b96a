//! Resource families that need more than the plain CRUD template.
//!
//! Families with no extra operations (heartbeats, escalation policies,
//! status pages and their sub-collections, metadata) are served by
//! [`ResourceManager`](crate::resource::ResourceManager) directly.

mod comments;
mod incidents;
mod metadata;
mod monitor_groups;
mod oncall;

#[cfg(test)]
mod oncall_tests;

pub use comments::CommentManager;
pub use incidents::IncidentManager;
pub use metadata::MetadataListParams;
pub use monitor_groups::MonitorGroupManager;
pub use oncall::OncallCalendarManager;
