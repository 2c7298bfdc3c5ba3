//! Property tests for building the forest from flat records.

use std::collections::HashSet;

use proptest::prelude::*;

use assetree::{build, NodeKind, TreeNode};

use crate::strategies::{all_ids, assets, locations};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every distinct id appears exactly once, whatever the references.
    #[test]
    fn property_every_record_placed_once(
        locations in locations(),
        assets in assets(),
    ) {
        let forest = build(&locations, &assets);
        let ids = all_ids(&forest);

        let unique: HashSet<&String> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len(), "duplicate node in forest");

        let expected: HashSet<String> = locations
            .iter()
            .map(|l| l.id.clone())
            .chain(assets.iter().map(|a| a.id.clone()))
            .collect();
        let actual: HashSet<String> = ids.into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: Locations only ever sit under locations.
    #[test]
    fn property_locations_never_under_assets(
        locations in locations(),
        assets in assets(),
    ) {
        fn check(nodes: &[TreeNode], parent_is_location: bool) -> bool {
            nodes.iter().all(|node| {
                let is_location = node.kind == NodeKind::Location;
                (!is_location || parent_is_location) && check(&node.children, is_location)
            })
        }
        let forest = build(&locations, &assets);
        prop_assert!(check(&forest, true));
    }

    /// PROPERTY: Building is deterministic for a given input order.
    #[test]
    fn property_build_is_deterministic(
        locations in locations(),
        assets in assets(),
    ) {
        prop_assert_eq!(build(&locations, &assets), build(&locations, &assets));
    }

    /// PROPERTY: Components are exactly the records that carry a sensor type.
    #[test]
    fn property_sensor_records_become_components(
        assets in assets(),
    ) {
        let forest = build(&[], &assets);
        let mut seen = HashSet::new();
        let first_wins: Vec<_> = assets.iter().filter(|a| seen.insert(a.id.clone())).collect();

        fn find<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
            nodes.iter().find_map(|n| {
                if n.id == id { Some(n) } else { find(&n.children, id) }
            })
        }
        for record in first_wins {
            let node = find(&forest, &record.id);
            prop_assert!(node.is_some());
            let is_component = matches!(node.map(|n| &n.kind), Some(NodeKind::Component(_)));
            prop_assert_eq!(is_component, record.is_component());
        }
    }
}
