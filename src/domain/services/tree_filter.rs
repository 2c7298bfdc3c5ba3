//! Predicate filtering over the asset forest.
//!
//! A node is kept when it matches the predicate itself or when any of its
//! descendants does, so the path to every match stays visible. Each node is
//! tested exactly once: the retained children are computed first, and a
//! node with retained children is kept without re-walking its subtree.
//!
//! Both walks use an explicit stack; tree depth is bounded only by the input.

use crate::domain::entities::{NodeKind, TreeNode};
use crate::domain::value_objects::{FilterPredicate, SensorType, StatusFilter};

/// Return a pruned copy of `forest` holding only matches and their ancestors
pub fn filter(forest: &[TreeNode], predicate: &FilterPredicate) -> Vec<TreeNode> {
    if predicate.is_empty() {
        return forest.to_vec();
    }

    let pruned = prune(forest, &predicate.needle(), predicate.status);

    tracing::debug!(
        text = %predicate.text,
        status = ?predicate.status,
        roots_in = forest.len(),
        roots_out = pruned.len(),
        "filtered asset tree"
    );
    pruned
}

/// Does `node` itself satisfy the predicate (ignoring descendants)?
pub fn matches(node: &TreeNode, predicate: &FilterPredicate) -> bool {
    matches_needle(node, &predicate.needle(), predicate.status)
}

/// Count nodes in `forest` that satisfy the predicate directly
pub fn count_matches(forest: &[TreeNode], predicate: &FilterPredicate) -> usize {
    let needle = predicate.needle();
    let mut stack: Vec<&TreeNode> = forest.iter().collect();
    let mut count = 0;
    while let Some(node) = stack.pop() {
        if matches_needle(node, &needle, predicate.status) {
            count += 1;
        }
        stack.extend(node.children.iter());
    }
    count
}

/// A node whose retained children are being collected
struct Frame<'a> {
    node: &'a TreeNode,
    next_child: usize,
    kept: Vec<TreeNode>,
}

impl<'a> Frame<'a> {
    fn new(node: &'a TreeNode) -> Self {
        Self {
            node,
            next_child: 0,
            kept: Vec::new(),
        }
    }
}

/// Post-order walk: a node is decided once all of its children are
fn prune(forest: &[TreeNode], needle: &str, status: Option<StatusFilter>) -> Vec<TreeNode> {
    let mut roots = Vec::new();
    for root in forest {
        let mut stack = vec![Frame::new(root)];
        while let Some(frame) = stack.last_mut() {
            let node: &TreeNode = frame.node;
            if let Some(child) = node.children.get(frame.next_child) {
                frame.next_child += 1;
                stack.push(Frame::new(child));
                continue;
            }

            let Some(done) = stack.pop() else {
                break;
            };
            if done.kept.is_empty() && !matches_needle(done.node, needle, status) {
                continue;
            }
            let kept = TreeNode {
                id: done.node.id.clone(),
                name: done.node.name.clone(),
                kind: done.node.kind.clone(),
                children: done.kept,
            };
            match stack.last_mut() {
                Some(parent) => parent.kept.push(kept),
                None => roots.push(kept),
            }
        }
    }
    roots
}

fn matches_needle(node: &TreeNode, needle: &str, status: Option<StatusFilter>) -> bool {
    let name_match = needle.is_empty() || node.name.to_lowercase().contains(needle);
    name_match && matches_status(&node.kind, status)
}

fn matches_status(kind: &NodeKind, status: Option<StatusFilter>) -> bool {
    let Some(flag) = status else {
        return true;
    };
    match kind {
        NodeKind::Component(info) => match flag {
            StatusFilter::Energy => info.sensor_type == SensorType::Energy,
            StatusFilter::Alert => info.status.is_alert(),
        },
        NodeKind::Location | NodeKind::Asset => false,
    }
}
