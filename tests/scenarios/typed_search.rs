//! Scenario: Typing a search
//!
//! Journey: An operator types a name into the search box, character by
//! character, then clears it.
//!
//! Steps:
//! 1. Each keystroke restarts the quiet period; nothing is filtered yet
//! 2. Once typing stops for the debounce delay the last text is applied
//! 3. Clearing the filters drops any text still pending
//!
//! Success Criteria:
//! - Only the final text of a burst is ever applied
//! - A cleared search never fires later

use std::time::{Duration, Instant};

use assetree::{AssetExplorer, CompanySession};

use crate::fixtures::{names, source};

const DELAY: Duration = Duration::from_millis(300);

/// SCENARIO: Burst of keystrokes
#[test]
fn scenario_only_final_text_of_a_burst_applies() {
    let source = source();
    let mut session = CompanySession::from_source(&source).unwrap();
    let mut explorer = AssetExplorer::new(DELAY);
    explorer.load(session.load(&source, "c1").unwrap());

    let t0 = Instant::now();
    // Step 1: "f", "fa", "fan" typed 100ms apart
    for (i, text) in ["f", "fa", "fan"].into_iter().enumerate() {
        let now = t0 + Duration::from_millis(100 * i as u64);
        explorer.set_search(text, now);
        assert!(!explorer.tick(now));
    }
    assert_eq!(explorer.pending_search(), Some("fan"));
    assert!(explorer.predicate().is_empty());

    // 250ms after the last keystroke: still quiet period
    assert!(!explorer.tick(t0 + Duration::from_millis(450)));

    // Step 2: the quiet period has elapsed
    assert!(explorer.tick(t0 + Duration::from_millis(500)));
    assert_eq!(explorer.predicate().text, "fan");
    assert_eq!(
        names(&explorer),
        vec!["Production Area", "Line 1", "Pump Station", "Fan Bearing"]
    );
    assert!(explorer.pending_search().is_none());
}

/// SCENARIO: Clear while typing
#[test]
fn scenario_clear_drops_pending_search() {
    let source = source();
    let mut session = CompanySession::from_source(&source).unwrap();
    let mut explorer = AssetExplorer::new(DELAY);
    explorer.load(session.load(&source, "c1").unwrap());

    let t0 = Instant::now();
    explorer.set_search("meter", t0);

    // Step 3
    explorer.clear_filters();
    assert!(!explorer.tick(t0 + DELAY * 2));
    assert_eq!(names(&explorer), vec!["Production Area", "Warehouse"]);
}
