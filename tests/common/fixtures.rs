//! Test fixtures - API payloads shared by the CLI tests.
//!
//! `c1` ("Apex Unit") builds into:
//!
//! ```text
//! Production Area
//! `- Line 1
//!    `- Pump Station
//!       |- Motor H12D      energy, alert
//!       `- Fan Bearing     vibration, operating
//! Warehouse
//! |- Conveyor
//! `- Meter                 energy, operating
//! Loose Sensor             vibration, alert (no parent)
//! ```
//!
//! `c2` has no per-company files, `c3` has a corrupt asset payload.

pub const COMPANIES: &str = r#"[
  {"id": "c1", "name": "Apex Unit"},
  {"id": "c2", "name": "Tobias Unit"},
  {"id": "c3", "name": "Jaguar Unit"}
]"#;

pub const APEX_LOCATIONS: &str = r#"[
  {"id": "L1", "name": "Production Area", "parentId": null},
  {"id": "L2", "name": "Warehouse", "parentId": null},
  {"id": "L3", "name": "Line 1", "parentId": "L1"}
]"#;

pub const APEX_ASSETS: &str = r#"[
  {"id": "A1", "name": "Pump Station", "locationId": "L3", "parentId": null, "sensorType": null, "status": null},
  {"id": "C1", "name": "Motor H12D", "parentId": "A1", "sensorId": "TFV655", "sensorType": "energy", "status": "alert", "gatewayId": "QHI640"},
  {"id": "C2", "name": "Fan Bearing", "parentId": "A1", "sensorId": "CFX848", "sensorType": "vibration", "status": "operating", "gatewayId": "QHI640"},
  {"id": "A2", "name": "Conveyor", "locationId": "L2"},
  {"id": "C3", "name": "Meter", "locationId": "L2", "sensorType": "energy", "status": "operating"},
  {"id": "C4", "name": "Loose Sensor", "sensorType": "vibration", "status": "alert"}
]"#;

pub const CORRUPT_ASSETS: &str = r#"[{"id": "A1", "name": "Pump""#;

/// Node count of the `c1` forest
pub const APEX_TOTAL_NODES: usize = 9;
