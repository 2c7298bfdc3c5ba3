//! Expansion and selection state for the explorer.
//!
//! While a filter is active every node is treated as expanded and manual
//! toggles are ignored; the manual set is kept untouched so it is restored
//! exactly once the filter clears.

use std::collections::HashSet;

use crate::domain::entities::TreeNode;
use crate::domain::services::{expandable_ids, Expansion};

#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: HashSet<String>,
    expandable: HashSet<String>,
    selected: Option<String>,
    filter_active: bool,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a freshly loaded forest: nothing expanded, nothing selected
    pub fn for_forest(forest: &[TreeNode]) -> Self {
        Self {
            expandable: expandable_ids(forest),
            ..Self::default()
        }
    }

    /// Forget everything and track the nodes of a new forest
    pub fn reset(&mut self, forest: &[TreeNode]) {
        *self = Self::for_forest(forest);
    }

    /// Switch filter-driven auto-expand on or off
    pub fn set_filter_active(&mut self, active: bool) {
        self.filter_active = active;
    }

    pub fn filter_active(&self) -> bool {
        self.filter_active
    }

    /// Flip `id` between expanded and collapsed.
    ///
    /// Returns true if the manual expansion set changed. Nodes without
    /// children and toggles made while a filter is active are ignored.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.filter_active || !self.expandable.contains(id) {
            return false;
        }
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
        true
    }

    /// Expand `id` if it can be expanded
    pub fn expand(&mut self, id: &str) -> bool {
        if self.filter_active || !self.expandable.contains(id) {
            return false;
        }
        self.expanded.insert(id.to_string())
    }

    /// Collapse `id` if it is expanded
    pub fn collapse(&mut self, id: &str) -> bool {
        if self.filter_active {
            return false;
        }
        self.expanded.remove(id)
    }

    pub fn expand_all(&mut self) {
        if !self.filter_active {
            self.expanded = self.expandable.clone();
        }
    }

    pub fn collapse_all(&mut self) {
        if !self.filter_active {
            self.expanded.clear();
        }
    }

    /// Select `id`, or clear the selection if `id` is already selected.
    ///
    /// Returns the selection after the change.
    pub fn select(&mut self, id: &str) -> Option<&str> {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
        self.selected.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether `id` currently shows its children
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion().is_expanded(id)
    }

    /// Manually expanded ids, independent of any active filter
    pub fn expanded_ids(&self) -> &HashSet<String> {
        &self.expanded
    }

    /// Expansion to hand to the flattener
    pub fn expansion(&self) -> Expansion<'_> {
        if self.filter_active {
            Expansion::All
        } else {
            Expansion::Only(&self.expanded)
        }
    }
}
