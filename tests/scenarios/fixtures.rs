//! In-memory companies for the scenarios.

use assetree::{AssetRecord, Company, ComponentStatus, InMemorySource, LocationRecord, SensorType};

/// Two companies; `c3` always fails to load
pub fn source() -> InMemorySource {
    InMemorySource::new()
        .with_company(
            Company::new("c1", "Apex Unit"),
            vec![
                LocationRecord::new("L1", "Production Area"),
                LocationRecord::new("L2", "Warehouse"),
                LocationRecord::new("L3", "Line 1").with_parent("L1"),
            ],
            vec![
                AssetRecord::new("A1", "Pump Station").at_location("L3"),
                AssetRecord::new("C1", "Motor H12D")
                    .under_asset("A1")
                    .with_sensor(SensorType::Energy, ComponentStatus::Alert)
                    .with_hardware("TFV655", "QHI640"),
                AssetRecord::new("C2", "Fan Bearing")
                    .under_asset("A1")
                    .with_sensor(SensorType::Vibration, ComponentStatus::Operating),
                AssetRecord::new("A2", "Conveyor").at_location("L2"),
                AssetRecord::new("C3", "Meter")
                    .at_location("L2")
                    .with_sensor(SensorType::Energy, ComponentStatus::Operating),
            ],
        )
        .with_company(
            Company::new("c2", "Tobias Unit"),
            vec![LocationRecord::new("T1", "Tobias Plant")],
            vec![AssetRecord::new("T2", "Compressor").at_location("T1")],
        )
        .with_company(Company::new("c3", "Jaguar Unit"), Vec::new(), Vec::new())
        .with_failure("c3")
}

pub fn names(explorer: &assetree::AssetExplorer) -> Vec<&str> {
    explorer.rows().iter().map(|r| r.name.as_str()).collect()
}
