//! Application Layer
//!
//! Orchestrates the domain services for interactive use.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain hierarchy rules (those are in Domain)
//! - Owns interaction state: active company, filters, expansion, selection
//!
//! ## Components
//!
//! - `AssetExplorer` - Filtered, expandable, selectable view of one forest
//! - `CompanySession` - Active company with race-safe fetch tickets
//! - `SearchDebouncer` - Quiet-period timer for search input

pub mod explorer;

pub use explorer::{
    fetch, AssetExplorer, CompanyPayload, CompanySession, ExpansionState, FetchOutcome, FetchTicket,
    SearchDebouncer, DEFAULT_DEBOUNCE_MS,
};
