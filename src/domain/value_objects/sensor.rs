//! Telemetry attributes carried by component nodes
//!
//! - `SensorType`: what the attached sensor measures
//! - `ComponentStatus`: last reported health of the component

use serde::{Deserialize, Serialize};

/// Kind of sensor attached to a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorType {
    /// Energy consumption sensor
    Energy,
    /// Vibration sensor
    Vibration,
}

impl SensorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorType::Energy => "energy",
            SensorType::Vibration => "vibration",
        }
    }
}

impl std::fmt::Display for SensorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational status reported by a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    #[default]
    Operating,
    Alert,
}

impl ComponentStatus {
    /// Returns true if the component is in a critical state
    pub fn is_alert(&self) -> bool {
        matches!(self, ComponentStatus::Alert)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentStatus::Operating => "operating",
            ComponentStatus::Alert => "alert",
        }
    }
}

impl std::fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
