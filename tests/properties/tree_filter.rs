//! Property tests for predicate filtering.

use std::collections::HashSet;

use proptest::prelude::*;

use assetree::domain::services::{count_matches, matches};
use assetree::{build, filter, FilterPredicate, StatusFilter, TreeNode};

use crate::strategies::{all_ids, assets, locations};

fn predicate() -> impl Strategy<Value = FilterPredicate> {
    (
        proptest::string::string_regex(" ?[a-zA-Z0-9]{0,2} ?").unwrap(),
        proptest::option::of(prop_oneof![Just(StatusFilter::Energy), Just(StatusFilter::Alert)]),
    )
        .prop_map(|(text, status)| FilterPredicate::new(text, status))
}

/// Leaves of the filtered forest must be direct matches
fn leaves_match(nodes: &[TreeNode], predicate: &FilterPredicate) -> bool {
    nodes.iter().all(|node| {
        if node.children.is_empty() {
            matches(node, predicate)
        } else {
            leaves_match(&node.children, predicate)
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Filtering never loses a match and never invents a node.
    #[test]
    fn property_filter_keeps_all_matches(
        locations in locations(),
        assets in assets(),
        predicate in predicate(),
    ) {
        let forest = build(&locations, &assets);
        let filtered = filter(&forest, &predicate);

        prop_assert_eq!(count_matches(&filtered, &predicate), count_matches(&forest, &predicate));

        let original: HashSet<String> = all_ids(&forest).into_iter().collect();
        prop_assert!(all_ids(&filtered).iter().all(|id| original.contains(id)));
    }

    /// PROPERTY: With a non-empty predicate every surviving leaf is a match.
    #[test]
    fn property_filtered_leaves_are_matches(
        locations in locations(),
        assets in assets(),
        predicate in predicate(),
    ) {
        prop_assume!(!predicate.is_empty());
        let filtered = filter(&build(&locations, &assets), &predicate);
        prop_assert!(leaves_match(&filtered, &predicate));
    }

    /// PROPERTY: Filtering a filtered forest again changes nothing.
    #[test]
    fn property_filter_is_idempotent(
        locations in locations(),
        assets in assets(),
        predicate in predicate(),
    ) {
        let once = filter(&build(&locations, &assets), &predicate);
        prop_assert_eq!(filter(&once, &predicate), once);
    }

    /// PROPERTY: Whitespace around the search text does not change the result.
    #[test]
    fn property_search_text_is_trimmed(
        locations in locations(),
        assets in assets(),
        text in "[a-z]{0,3}",
    ) {
        let forest = build(&locations, &assets);
        let padded = FilterPredicate::text(format!("  {} ", text));
        prop_assert_eq!(filter(&forest, &padded), filter(&forest, &FilterPredicate::text(text)));
    }
}
