//! Tree construction from flat location and asset records.
//!
//! Placement rules:
//! - a location goes under its `parent_id` location, else it is a root;
//! - an asset or component goes under its `location_id` location, else under
//!   its `parent_id` asset, else it is a root.
//!
//! References that do not resolve (unknown id, self reference, cycles) fall
//! back to root placement. Records are never dropped unless their `id` is
//! empty or repeats an id already seen. Locations and assets share one id
//! space, so an asset reusing a location id is skipped like any other
//! duplicate. Sibling order follows input order, locations first.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{AssetRecord, ComponentInfo, LocationRecord, TreeNode};

/// Build an ordered forest from flat records
pub fn build(locations: &[LocationRecord], assets: &[AssetRecord]) -> Vec<TreeNode> {
    let mut arena = Arena::default();

    let mut location_index: HashMap<&str, usize> = HashMap::new();
    let mut placed_locations: Vec<&LocationRecord> = Vec::new();
    for loc in locations {
        if !arena.admit(&loc.id, &loc.name) {
            continue;
        }
        let idx = arena.push(TreeNode::location(loc.id.clone(), loc.name.clone()));
        location_index.insert(loc.id.as_str(), idx);
        placed_locations.push(loc);
    }

    let mut asset_index: HashMap<&str, usize> = HashMap::new();
    let mut placed_assets: Vec<&AssetRecord> = Vec::new();
    for asset in assets {
        if !arena.admit(&asset.id, &asset.name) {
            continue;
        }
        let idx = arena.push(asset_node(asset));
        asset_index.insert(asset.id.as_str(), idx);
        placed_assets.push(asset);
    }

    // Locations occupy the first slots of the arena, assets follow.
    for (idx, loc) in placed_locations.iter().enumerate() {
        arena.parent[idx] = loc
            .parent_id
            .as_deref()
            .and_then(|pid| location_index.get(pid).copied())
            .filter(|&p| p != idx);
    }

    let offset = placed_locations.len();
    for (i, asset) in placed_assets.iter().enumerate() {
        let idx = offset + i;
        let by_location = asset
            .location_id
            .as_deref()
            .and_then(|lid| location_index.get(lid).copied());
        let by_parent = || {
            asset
                .parent_id
                .as_deref()
                .and_then(|pid| asset_index.get(pid).copied())
                .filter(|&p| p != idx)
        };
        arena.parent[idx] = by_location.or_else(by_parent);
    }

    arena.break_cycles();
    let forest = arena.assemble();

    tracing::debug!(
        locations = locations.len(),
        assets = assets.len(),
        roots = forest.len(),
        "built asset tree"
    );
    forest
}

fn asset_node(record: &AssetRecord) -> TreeNode {
    match record.sensor_type {
        Some(sensor_type) => TreeNode::component(
            record.id.clone(),
            record.name.clone(),
            ComponentInfo {
                sensor_id: record.sensor_id.clone().unwrap_or_default(),
                sensor_type,
                status: record.status.unwrap_or_default(),
                gateway_id: record.gateway_id.clone().unwrap_or_default(),
            },
        ),
        None => TreeNode::asset(record.id.clone(), record.name.clone()),
    }
}

/// Flat node storage with parent handles, discarded once the forest is built
#[derive(Default)]
struct Arena {
    nodes: Vec<TreeNode>,
    parent: Vec<Option<usize>>,
    seen: HashSet<String>,
}

impl Arena {
    /// Decide whether a record may enter the tree
    fn admit(&mut self, id: &str, name: &str) -> bool {
        if id.is_empty() {
            tracing::warn!(name, "skipping record without id");
            return false;
        }
        if !self.seen.insert(id.to_string()) {
            tracing::warn!(id, "skipping duplicate record");
            return false;
        }
        true
    }

    fn push(&mut self, node: TreeNode) -> usize {
        self.nodes.push(node);
        self.parent.push(None);
        self.nodes.len() - 1
    }

    /// Promote one member of every parent cycle to root.
    ///
    /// The member with the lowest arena index is promoted, so the result is
    /// deterministic for a given input order.
    fn break_cycles(&mut self) {
        const UNVISITED: u8 = 0;
        const IN_PATH: u8 = 1;
        const DONE: u8 = 2;

        let mut state = vec![UNVISITED; self.nodes.len()];
        let mut path: Vec<usize> = Vec::new();

        for start in 0..self.nodes.len() {
            if state[start] != UNVISITED {
                continue;
            }
            path.clear();
            let mut current = Some(start);
            while let Some(idx) = current {
                match state[idx] {
                    DONE => break,
                    IN_PATH => {
                        let cycle_start = path.iter().position(|&p| p == idx).unwrap_or(0);
                        if let Some(&promoted) = path[cycle_start..].iter().min() {
                            tracing::warn!(id = %self.nodes[promoted].id, "parent cycle, promoting to root");
                            self.parent[promoted] = None;
                        }
                        break;
                    }
                    _ => {
                        state[idx] = IN_PATH;
                        path.push(idx);
                        current = self.parent[idx];
                    }
                }
            }
            for &idx in &path {
                state[idx] = DONE;
            }
        }
    }

    /// Move every node under its parent and return the roots in arena order
    fn assemble(self) -> Vec<TreeNode> {
        let len = self.nodes.len();
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); len];
        let mut roots: Vec<usize> = Vec::new();
        for (idx, parent) in self.parent.iter().enumerate() {
            match parent {
                Some(p) => children[*p].push(idx),
                None => roots.push(idx),
            }
        }

        // Post-order so every child is complete before its parent takes it.
        let mut order: Vec<usize> = Vec::with_capacity(len);
        let mut stack: Vec<(usize, bool)> = roots.iter().rev().map(|&r| (r, false)).collect();
        while let Some((idx, visited)) = stack.pop() {
            if visited {
                order.push(idx);
                continue;
            }
            stack.push((idx, true));
            stack.extend(children[idx].iter().rev().map(|&c| (c, false)));
        }

        let mut slots: Vec<Option<TreeNode>> = self.nodes.into_iter().map(Some).collect();
        for idx in order {
            let kids: Vec<TreeNode> = children[idx]
                .iter()
                .filter_map(|&c| slots[c].take())
                .collect();
            if let Some(node) = slots[idx].as_mut() {
                node.children = kids;
            }
        }

        roots.iter().filter_map(|&r| slots[r].take()).collect()
    }
}
