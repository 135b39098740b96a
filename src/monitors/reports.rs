//! Read-only monitor reports: response times and availability.

use serde::{Deserialize, Serialize};

/// One response time sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimeSample {
    /// When the response was received (ISO-8601)
    pub at: String,
    /// Response time in seconds
    pub response_time: f64,
}

/// Samples recorded from one check region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionResponseTimes {
    /// Region code, e.g. `us`
    pub region: String,
    /// Samples, oldest first
    #[serde(default)]
    pub response_times: Vec<ResponseTimeSample>,
}

/// Attributes of a `monitor_response_times` report (last 24 hours).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimes {
    /// One entry per check region
    #[serde(default)]
    pub regions: Vec<RegionResponseTimes>,
}

/// Attributes of a `monitor_sla` report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySummary {
    /// Uptime percentage, 0 to 100
    pub availability: f64,
    /// Seconds
    pub total_downtime: u64,
    /// Incidents opened in the range
    pub number_of_incidents: u64,
    /// Seconds
    pub longest_incident: u64,
    /// Seconds
    pub average_incident: u64,
}

/// Date range for an availability summary, as `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlaParams {
    /// First day; server default is the monitor's creation date
    pub from: Option<String>,
    /// Last day; server default is today
    pub to: Option<String>,
}
