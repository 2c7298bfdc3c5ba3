//! Domain Services
//!
//! Pure transformations over the asset hierarchy:
//! - `tree_builder` - flat records to an ordered forest
//! - `tree_filter` - predicate pruning that keeps ancestors of matches
//! - `flattener` - expanded forest to depth-annotated rows

pub mod flattener;
pub mod tree_builder;
pub mod tree_filter;

pub use flattener::{count_nodes, expandable_ids, flatten, Expansion};
pub use tree_builder::build;
pub use tree_filter::{count_matches, filter, matches};
