use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ok,
    Error,
    ShuttingDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStatus {
    Up,
    Down,
}

/// One health indicator (database, disk, ...). Extra indicator-specific
/// fields are preserved as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub status: IndicatorStatus,
    #[serde(flatten)]
    pub detail: HashMap<String, Value>,
}

/// Aggregate health probe result: `info` holds indicators that are up,
/// `error` those that are down, `details` everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    #[serde(default)]
    pub info: HashMap<String, Indicator>,
    #[serde(default)]
    pub error: HashMap<String, Indicator>,
    #[serde(default)]
    pub details: HashMap<String, Indicator>,
}
