//! Depth-annotated row produced by flattening a forest

use serde::Serialize;

use super::node::{NodeKind, TreeNode};

/// One visible row of the flattened tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatRow {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Depth level (0 = root)
    pub depth: usize,
    pub is_first_child: bool,
    pub is_last_child: bool,
    /// For each ancestor level, whether that ancestor was the last sibling.
    /// Only used to draw connector lines.
    pub ancestor_is_last_chain: Vec<bool>,
    /// Whether the node has children (renders a toggle)
    pub has_children: bool,
    /// Whether the children follow this row
    pub expanded: bool,
}

impl FlatRow {
    pub(crate) fn from_node(node: &TreeNode, depth: usize, index: usize, siblings: usize) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind.clone(),
            depth,
            is_first_child: index == 0,
            is_last_child: index + 1 == siblings,
            ancestor_is_last_chain: Vec::new(),
            has_children: node.has_children(),
            expanded: false,
        }
    }

    pub fn is_alert(&self) -> bool {
        match &self.kind {
            NodeKind::Component(info) => info.status.is_alert(),
            NodeKind::Location | NodeKind::Asset => false,
        }
    }
}
