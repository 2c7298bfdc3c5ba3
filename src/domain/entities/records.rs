//! Flat records as delivered by the asset API
//!
//! Field names follow the API's camelCase JSON. `id` and `name` default to
//! empty strings so a malformed record can be skipped by the tree builder
//! instead of failing the whole payload.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ComponentStatus, SensorType};

/// A company whose hierarchy can be browsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
}

impl Company {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A physical site or area, optionally nested under another location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl LocationRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
        }
    }

    /// Nest this location under another location
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

/// An asset or, when it carries `sensorType`, a component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub sensor_id: Option<String>,
    #[serde(default)]
    pub sensor_type: Option<SensorType>,
    #[serde(default)]
    pub status: Option<ComponentStatus>,
    #[serde(default)]
    pub gateway_id: Option<String>,
}

impl AssetRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Attach this record to a location
    pub fn at_location(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    /// Nest this record under another asset
    pub fn under_asset(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Turn this record into a component with the given sensor
    pub fn with_sensor(mut self, sensor_type: SensorType, status: ComponentStatus) -> Self {
        self.sensor_type = Some(sensor_type);
        self.status = Some(status);
        self
    }

    /// Set sensor and gateway identifiers
    pub fn with_hardware(mut self, sensor_id: impl Into<String>, gateway_id: impl Into<String>) -> Self {
        self.sensor_id = Some(sensor_id.into());
        self.gateway_id = Some(gateway_id.into());
        self
    }

    /// Records carrying a sensor type are components
    pub fn is_component(&self) -> bool {
        self.sensor_type.is_some()
    }
}
