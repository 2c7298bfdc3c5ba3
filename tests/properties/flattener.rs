//! Property tests for flattening the forest into rows.

use std::collections::HashSet;

use proptest::prelude::*;

use assetree::domain::entities::find_in_forest;
use assetree::domain::services::{count_nodes, expandable_ids};
use assetree::{build, flatten, Expansion};

use crate::strategies::{all_ids, assets, locations};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Fully expanded rows are the pre-order walk of the forest.
    #[test]
    fn property_expand_all_visits_every_node_in_pre_order(
        locations in locations(),
        assets in assets(),
    ) {
        let forest = build(&locations, &assets);
        let rows = flatten(&forest, Expansion::All);

        prop_assert_eq!(rows.len(), count_nodes(&forest));
        let row_ids: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(row_ids, all_ids(&forest));
    }

    /// PROPERTY: Depth steps down at most one level and the connector chain
    /// always has one entry per ancestor.
    #[test]
    fn property_row_depths_are_consistent(
        locations in locations(),
        assets in assets(),
        expanded_picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let forest = build(&locations, &assets);
        let ids = all_ids(&forest);
        let expanded: HashSet<String> = if ids.is_empty() {
            HashSet::new()
        } else {
            expanded_picks.iter().map(|i| ids[i.index(ids.len())].clone()).collect()
        };

        let rows = flatten(&forest, Expansion::Only(&expanded));
        if let Some(first) = rows.first() {
            prop_assert_eq!(first.depth, 0);
        }
        for pair in rows.windows(2) {
            prop_assert!(pair[1].depth <= pair[0].depth + 1);
            if pair[1].depth == pair[0].depth + 1 {
                prop_assert!(pair[0].expanded);
            }
        }
        for row in &rows {
            prop_assert_eq!(row.ancestor_is_last_chain.len(), row.depth);
            prop_assert!(!row.expanded || row.has_children);
        }
    }

    /// PROPERTY: Collapsing one node of a fully expanded forest hides exactly
    /// its descendants, and expanding it again restores every row.
    #[test]
    fn property_collapse_hides_exactly_its_descendants(
        locations in locations(),
        assets in assets(),
        pick in any::<prop::sample::Index>(),
    ) {
        let forest = build(&locations, &assets);
        let mut expanded = expandable_ids(&forest);
        prop_assume!(!expanded.is_empty());

        let mut candidates: Vec<String> = expanded.iter().cloned().collect();
        candidates.sort();
        let id = candidates[pick.index(candidates.len())].clone();
        let node = find_in_forest(&forest, &id).unwrap();

        let before = flatten(&forest, Expansion::Only(&expanded));
        prop_assert_eq!(before.len(), count_nodes(&forest));

        expanded.remove(&id);
        let after = flatten(&forest, Expansion::Only(&expanded));
        prop_assert_eq!(before.len() - after.len(), node.node_count() - 1);
        let row = after.iter().find(|r| r.id == id).unwrap();
        prop_assert!(!row.expanded);

        expanded.insert(id);
        let restored = flatten(&forest, Expansion::Only(&expanded));
        prop_assert_eq!(restored.len(), before.len());
    }

    /// PROPERTY: With nothing expanded only the roots are visible.
    #[test]
    fn property_collapsed_shows_roots(
        locations in locations(),
        assets in assets(),
    ) {
        let forest = build(&locations, &assets);
        let none = HashSet::new();
        let rows = flatten(&forest, Expansion::Only(&none));
        prop_assert_eq!(rows.len(), forest.len());
        prop_assert!(rows.iter().all(|r| r.depth == 0));
    }
}
