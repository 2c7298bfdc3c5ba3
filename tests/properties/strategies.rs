//! Record generators shared by the property tests.
//!
//! Ids come from small pools so parent references often resolve, often
//! dangle, and regularly form cycles or point at themselves.

use proptest::prelude::*;

use assetree::{AssetRecord, ComponentStatus, LocationRecord, SensorType, TreeNode};

const POOL: usize = 12;

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,11}").unwrap()
}

fn maybe_ref(prefix: &'static str) -> impl Strategy<Value = Option<String>> {
    proptest::option::of((0..POOL + 2).prop_map(move |i| format!("{}{}", prefix, i)))
}

pub fn locations() -> impl Strategy<Value = Vec<LocationRecord>> {
    proptest::collection::vec(
        ((0..POOL), name(), maybe_ref("L")).prop_map(|(i, name, parent)| LocationRecord {
            id: format!("L{}", i),
            name,
            parent_id: parent,
        }),
        0..=10,
    )
}

fn sensor() -> impl Strategy<Value = Option<(SensorType, ComponentStatus)>> {
    proptest::option::of((
        prop_oneof![Just(SensorType::Energy), Just(SensorType::Vibration)],
        prop_oneof![Just(ComponentStatus::Operating), Just(ComponentStatus::Alert)],
    ))
}

pub fn assets() -> impl Strategy<Value = Vec<AssetRecord>> {
    proptest::collection::vec(
        ((0..POOL), name(), maybe_ref("L"), maybe_ref("A"), sensor()).prop_map(
            |(i, name, location, parent, sensor)| {
                let mut record = AssetRecord::new(format!("A{}", i), name);
                record.location_id = location;
                record.parent_id = parent;
                if let Some((sensor_type, status)) = sensor {
                    record = record.with_sensor(sensor_type, status);
                }
                record
            },
        ),
        0..=16,
    )
}

/// Every node id in pre-order
pub fn all_ids(forest: &[TreeNode]) -> Vec<String> {
    fn walk(nodes: &[TreeNode], out: &mut Vec<String>) {
        for node in nodes {
            out.push(node.id.clone());
            walk(&node.children, out);
        }
    }
    let mut out = Vec::new();
    walk(forest, &mut out);
    out
}
