//! Flattening a forest into depth-annotated rows for windowed rendering.

use std::collections::HashSet;

use crate::domain::entities::{FlatRow, TreeNode};

/// Which nodes show their children
#[derive(Debug, Clone, Copy)]
pub enum Expansion<'a> {
    /// Every node is expanded (used while a filter is active)
    All,
    /// Only the listed node ids are expanded
    Only(&'a HashSet<String>),
}

impl Expansion<'_> {
    pub fn is_expanded(&self, id: &str) -> bool {
        match self {
            Expansion::All => true,
            Expansion::Only(ids) => ids.contains(id),
        }
    }
}

/// Flatten `forest` in pre-order, descending only into expanded nodes
pub fn flatten(forest: &[TreeNode], expansion: Expansion<'_>) -> Vec<FlatRow> {
    let mut rows = Vec::new();
    // `chain[d]` is whether the open ancestor at depth `d` is its parent's last child
    let mut chain: Vec<bool> = Vec::new();
    let mut stack: Vec<(&[TreeNode], usize)> = vec![(forest, 0)];
    while let Some(top) = stack.last_mut() {
        let (siblings, index) = *top;
        let Some(node) = siblings.get(index) else {
            stack.pop();
            chain.pop();
            continue;
        };
        top.1 += 1;

        let depth = stack.len() - 1;
        let mut row = FlatRow::from_node(node, depth, index, siblings.len());
        row.ancestor_is_last_chain = chain.clone();
        row.expanded = node.has_children() && expansion.is_expanded(&node.id);
        let descend = row.expanded;
        let is_last = row.is_last_child;
        rows.push(row);

        if descend {
            chain.push(is_last);
            stack.push((node.children.as_slice(), 0));
        }
    }
    rows
}

/// Total number of nodes in a forest
pub fn count_nodes(forest: &[TreeNode]) -> usize {
    forest.iter().map(TreeNode::node_count).sum()
}

/// Ids of every node that has children
pub fn expandable_ids(forest: &[TreeNode]) -> HashSet<String> {
    let mut stack: Vec<&TreeNode> = forest.iter().collect();
    let mut out = HashSet::new();
    while let Some(node) = stack.pop() {
        if node.has_children() {
            out.insert(node.id.clone());
            stack.extend(node.children.iter());
        }
    }
    out
}
