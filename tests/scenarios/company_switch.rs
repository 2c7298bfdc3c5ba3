//! Scenario: Switching companies
//!
//! Journey: An operator flips between companies while data is loading.
//!
//! Steps:
//! 1. Start loading one company, switch to another before it arrives
//! 2. The late response for the first company is dropped
//! 3. A company whose data cannot be loaded shows an empty tree and an error
//! 4. Switching away from the broken company clears the error
//!
//! Success Criteria:
//! - A stale response never replaces the tree on screen
//! - Filters and expansion never leak from one company to the next

use assetree::application::{fetch, FetchOutcome};
use assetree::{AssetExplorer, CompanySession, StatusFilter};

use crate::fixtures::{names, source};

/// SCENARIO: Out-of-order responses
#[test]
fn scenario_late_response_for_previous_company_is_dropped() {
    let source = source();
    let mut session = CompanySession::from_source(&source).unwrap();
    let mut explorer = AssetExplorer::default();

    // Step 1: two requests in flight
    let apex = session.switch_company("c1").unwrap();
    let tobias = session.switch_company("c2").unwrap();

    // Tobias answers first
    match session.accept(&tobias, fetch(&source, tobias.company_id())) {
        FetchOutcome::Accepted(forest) => explorer.load(forest),
        FetchOutcome::Stale => panic!("current request must be accepted"),
    }
    assert_eq!(names(&explorer), vec!["Tobias Plant"]);

    // Step 2: Apex arrives late and is ignored
    let late = session.accept(&apex, fetch(&source, apex.company_id()));
    assert_eq!(late, FetchOutcome::Stale);
    assert_eq!(names(&explorer), vec!["Tobias Plant"]);
    assert_eq!(session.active().map(|c| c.id.as_str()), Some("c2"));
}

/// SCENARIO: Broken company, then recovery
#[test]
fn scenario_failed_load_shows_empty_tree_then_recovers() {
    let source = source();
    let mut session = CompanySession::from_source(&source).unwrap();
    let mut explorer = AssetExplorer::default();

    explorer.load(session.load(&source, "c1").unwrap());
    explorer.toggle_status_filter(StatusFilter::Energy);
    explorer.expand_all();

    // Step 3: the broken company yields an empty forest and an error
    explorer.load(session.load(&source, "Jaguar Unit").unwrap());
    assert!(explorer.rows().is_empty());
    assert!(explorer.predicate().is_empty());
    assert!(session.last_error().is_some());

    // Step 4: a good company loads with fresh state
    explorer.load(session.load(&source, "c1").unwrap());
    assert!(session.last_error().is_none());
    assert_eq!(names(&explorer), vec!["Production Area", "Warehouse"]);
}
