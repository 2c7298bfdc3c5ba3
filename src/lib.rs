//! assetree - asset hierarchy explorer
//!
//! Builds a forest of locations, assets and sensor-bearing components from
//! flat API records, filters it by name and status, and flattens it into
//! rows for rendering. The interaction layer tracks the active company,
//! expansion and selection, and debounces search input.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{AssetExplorer, CompanySession, ExpansionState, SearchDebouncer};
pub use config::Config;
pub use domain::entities::{
    AssetRecord, Company, ComponentInfo, FlatRow, LocationRecord, NodeKind, TreeNode,
};
pub use domain::ports::AssetSource;
pub use domain::services::{build, filter, flatten, Expansion};
pub use domain::value_objects::{ComponentStatus, FilterPredicate, SensorType, StatusFilter};
pub use error::{AssetreeError, AssetreeResult};
pub use infrastructure::{InMemorySource, JsonDirSource};
