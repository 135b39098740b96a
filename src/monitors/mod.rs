//! Monitors: typed attributes, the collection manager and the stateful
//! [`Monitor`] entity.

mod attributes;
mod entity;
mod manager;
mod new_monitor;
mod reports;

#[cfg(test)]
mod attributes_tests;

pub use attributes::{
    HttpMethod, MonitorAttributes, MonitorKind, MonitorRelationships, MonitorStatus,
    PolicyRelationship, RequestHeader,
};
pub use entity::Monitor;
pub use manager::{MonitorListParams, MonitorManager, MonitorResource};
pub use new_monitor::NewMonitor;
pub use reports::{AvailabilitySummary, RegionResponseTimes, ResponseTimeSample, ResponseTimes, SlaParams};
