//! Tree node entity
//!
//! Every node owns its children. There are no back references; parents are
//! resolved by id only while the tree is being built.

use serde::Serialize;

use crate::domain::value_objects::{ComponentStatus, SensorType};

/// Telemetry attributes only components carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    pub sensor_id: String,
    pub sensor_type: SensorType,
    pub status: ComponentStatus,
    pub gateway_id: String,
}

/// Discriminates the three node kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    Location,
    Asset,
    Component(ComponentInfo),
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Location => "location",
            NodeKind::Asset => "asset",
            NodeKind::Component(_) => "component",
        }
    }
}

/// A node in the asset hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn with_kind(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn location(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_kind(id, name, NodeKind::Location)
    }

    pub fn asset(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_kind(id, name, NodeKind::Asset)
    }

    pub fn component(id: impl Into<String>, name: impl Into<String>, info: ComponentInfo) -> Self {
        Self::with_kind(id, name, NodeKind::Component(info))
    }

    /// Append a child, builder style
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn component_info(&self) -> Option<&ComponentInfo> {
        match &self.kind {
            NodeKind::Component(info) => Some(info),
            NodeKind::Location | NodeKind::Asset => None,
        }
    }

    pub fn sensor_type(&self) -> Option<SensorType> {
        self.component_info().map(|c| c.sensor_type)
    }

    pub fn status(&self) -> Option<ComponentStatus> {
        self.component_info().map(|c| c.status)
    }

    /// True for components reporting an alert
    pub fn is_alert(&self) -> bool {
        self.status().is_some_and(|s| s.is_alert())
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        let mut stack = vec![self];
        let mut count = 0;
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Find a node by id in this subtree (pre-order)
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.id == id {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }
}

/// Find a node by id anywhere in a forest
pub fn find_in_forest<'a>(forest: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    forest.iter().find_map(|n| n.find(id))
}

/// Path from a root down to the node with `id`, both ends included
pub fn ancestry<'a>(forest: &'a [TreeNode], id: &str) -> Option<Vec<&'a TreeNode>> {
    let mut stack: Vec<(&'a TreeNode, usize)> = forest.iter().rev().map(|n| (n, 0)).collect();
    let mut path: Vec<&'a TreeNode> = Vec::new();
    while let Some((node, depth)) = stack.pop() {
        path.truncate(depth);
        path.push(node);
        if node.id == id {
            return Some(path);
        }
        stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
    }
    None
}
