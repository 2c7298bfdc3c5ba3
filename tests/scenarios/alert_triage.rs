//! Scenario: Alert triage
//!
//! Journey: An operator opens a company, drills into one branch, then
//! switches on the alert filter to find failing components.
//!
//! Steps:
//! 1. Load the company; only roots are visible
//! 2. Expand one branch by hand
//! 3. Turn on the alert filter; every path to an alert is shown expanded
//! 4. Select the failing component and read its details
//! 5. Clear the filter; the hand-made expansion is back exactly as it was
//!
//! Success Criteria:
//! - Filtering never loses track of the manual expansion set
//! - Selection survives filter changes

use std::time::Duration;

use assetree::{AssetExplorer, CompanySession, NodeKind, StatusFilter};

use crate::fixtures::{names, source};

/// SCENARIO: Find the alerting motor and come back to the browsing state
#[test]
fn scenario_alert_triage_restores_manual_expansion() {
    let source = source();
    let mut session = CompanySession::from_source(&source).unwrap();
    let mut explorer = AssetExplorer::new(Duration::from_millis(300));

    // Step 1: load, everything collapsed
    explorer.load(session.load(&source, "Apex Unit").unwrap());
    assert_eq!(names(&explorer), vec!["Production Area", "Warehouse"]);

    // Step 2: open the warehouse
    assert!(explorer.toggle("L2"));
    assert_eq!(
        names(&explorer),
        vec!["Production Area", "Warehouse", "Conveyor", "Meter"]
    );

    // Step 3: alert filter force-expands the path to the motor
    explorer.toggle_status_filter(StatusFilter::Alert);
    assert_eq!(
        names(&explorer),
        vec!["Production Area", "Line 1", "Pump Station", "Motor H12D"]
    );
    assert_eq!(explorer.match_count(), 1);

    // Manual toggles are ignored while filtering
    assert!(!explorer.toggle("L1"));

    // Step 4: select the motor from the filtered rows
    explorer.move_to_end();
    assert_eq!(explorer.select_at_cursor(), Some("C1"));
    let motor = explorer.selected_node().unwrap();
    match &motor.kind {
        NodeKind::Component(info) => {
            assert!(info.status.is_alert());
            assert_eq!(info.gateway_id, "QHI640");
        }
        other => panic!("expected a component, got {:?}", other),
    }

    // Step 5: pressing the flag again clears it, manual state returns
    explorer.toggle_status_filter(StatusFilter::Alert);
    assert!(explorer.predicate().is_empty());
    assert_eq!(
        names(&explorer),
        vec!["Production Area", "Warehouse", "Conveyor", "Meter"]
    );
    assert_eq!(explorer.state().selected(), Some("C1"));
}

/// SCENARIO: Energy and alert flags are exclusive; the last one wins
#[test]
fn scenario_switching_flags_replaces_filter() {
    let source = source();
    let mut session = CompanySession::from_source(&source).unwrap();
    let mut explorer = AssetExplorer::default();
    explorer.load(session.load(&source, "c1").unwrap());

    explorer.toggle_status_filter(StatusFilter::Alert);
    explorer.toggle_status_filter(StatusFilter::Energy);

    assert_eq!(explorer.predicate().status, Some(StatusFilter::Energy));
    assert_eq!(
        names(&explorer),
        vec![
            "Production Area",
            "Line 1",
            "Pump Station",
            "Motor H12D",
            "Warehouse",
            "Meter"
        ]
    );
}
