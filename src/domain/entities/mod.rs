//! Domain Entities
//!
//! - `records` - Flat API records (Company, LocationRecord, AssetRecord)
//! - `node` - Owned tree nodes with a tagged kind
//! - `flat_row` - Rows of a flattened, depth-annotated tree

mod flat_row;
mod node;
mod records;

pub use flat_row::FlatRow;
pub use node::{ancestry, find_in_forest, ComponentInfo, NodeKind, TreeNode};
pub use records::{AssetRecord, Company, LocationRecord};
