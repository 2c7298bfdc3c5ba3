//! Asset explorer
//!
//! Interaction layer on top of the pure domain services. The explorer owns
//! the loaded forest, the active filter, expansion/selection state and the
//! search debouncer, and keeps the visible rows in sync with all of them.
//!
//! # Module Structure
//!
//! - `state` - ExpansionState (expanded ids, selection, filter auto-expand)
//! - `debounce` - SearchDebouncer (cancellable quiet-period timer)
//! - `session` - CompanySession (active company, fetch tickets)

mod debounce;
mod session;
mod state;

use std::time::{Duration, Instant};

pub use debounce::{SearchDebouncer, DEFAULT_DEBOUNCE_MS};
pub use session::{fetch, CompanyPayload, CompanySession, FetchOutcome, FetchTicket};
pub use state::ExpansionState;

use crate::domain::entities::{find_in_forest, FlatRow, TreeNode};
use crate::domain::services::{count_matches, count_nodes, filter, flatten};
use crate::domain::value_objects::{FilterPredicate, StatusFilter};

/// Interactive view over one company's forest
#[derive(Debug, Clone)]
pub struct AssetExplorer {
    forest: Vec<TreeNode>,
    /// `None` while the predicate is empty: the forest is shown as-is
    filtered: Option<Vec<TreeNode>>,
    predicate: FilterPredicate,
    state: ExpansionState,
    debouncer: SearchDebouncer,
    rows: Vec<FlatRow>,
    cursor: usize,
}

impl Default for AssetExplorer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl AssetExplorer {
    /// Create an empty explorer with the given search debounce delay
    pub fn new(debounce: Duration) -> Self {
        Self {
            forest: Vec::new(),
            filtered: None,
            predicate: FilterPredicate::default(),
            state: ExpansionState::new(),
            debouncer: SearchDebouncer::new(debounce),
            rows: Vec::new(),
            cursor: 0,
        }
    }

    /// Replace the forest (company switch): filters, expansion, selection
    /// and pending search input are all reset
    pub fn load(&mut self, forest: Vec<TreeNode>) {
        self.state.reset(&forest);
        self.forest = forest;
        self.predicate = FilterPredicate::default();
        self.debouncer.cancel();
        self.cursor = 0;
        self.refilter();
    }

    pub fn forest(&self) -> &[TreeNode] {
        &self.forest
    }

    /// Forest after filtering
    pub fn visible_forest(&self) -> &[TreeNode] {
        self.filtered.as_deref().unwrap_or(&self.forest)
    }

    /// Rows currently visible, in display order
    pub fn rows(&self) -> &[FlatRow] {
        &self.rows
    }

    pub fn predicate(&self) -> &FilterPredicate {
        &self.predicate
    }

    pub fn state(&self) -> &ExpansionState {
        &self.state
    }

    /// Search text typed but not yet applied
    pub fn pending_search(&self) -> Option<&str> {
        self.debouncer.pending()
    }

    pub fn total_nodes(&self) -> usize {
        count_nodes(&self.forest)
    }

    /// Nodes matching the active predicate directly
    pub fn match_count(&self) -> usize {
        if self.predicate.is_empty() {
            return self.total_nodes();
        }
        count_matches(&self.forest, &self.predicate)
    }

    // --- filtering ---

    /// Queue search text; it is applied by `tick` after the quiet period
    pub fn set_search(&mut self, text: impl Into<String>, now: Instant) {
        self.debouncer.input(text, now);
    }

    /// Apply due search text. Returns true if the rows changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(text) => self.apply_search(text),
            None => false,
        }
    }

    /// Time until pending search text is due
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Apply search text immediately, bypassing the debouncer
    pub fn apply_search(&mut self, text: impl Into<String>) -> bool {
        self.debouncer.cancel();
        let text = text.into();
        if self.predicate.text == text {
            return false;
        }
        self.predicate.text = text;
        self.refilter();
        true
    }

    pub fn set_status_filter(&mut self, status: Option<StatusFilter>) {
        if self.predicate.status != status {
            self.predicate.status = status;
            self.refilter();
        }
    }

    /// Filter-bar semantics: pressing the active flag again clears it
    pub fn toggle_status_filter(&mut self, status: StatusFilter) {
        let next = if self.predicate.status == Some(status) {
            None
        } else {
            Some(status)
        };
        self.set_status_filter(next);
    }

    pub fn clear_filters(&mut self) {
        self.debouncer.cancel();
        if !self.predicate.is_empty() {
            self.predicate = FilterPredicate::default();
            self.refilter();
        }
    }

    // --- expansion & selection ---

    pub fn toggle(&mut self, id: &str) -> bool {
        let changed = self.state.toggle(id);
        if changed {
            self.relayout();
        }
        changed
    }

    /// Expand `id`; ignored while a filter is active or if it has no children
    pub fn expand(&mut self, id: &str) -> bool {
        let changed = self.state.expand(id);
        if changed {
            self.relayout();
        }
        changed
    }

    pub fn expand_all(&mut self) {
        self.state.expand_all();
        self.relayout();
    }

    pub fn collapse_all(&mut self) {
        self.state.collapse_all();
        self.relayout();
    }

    /// Toggle-select `id`; returns the selection after the change
    pub fn select(&mut self, id: &str) -> Option<&str> {
        self.state.select(id)
    }

    /// The selected node, looked up in the unfiltered forest
    pub fn selected_node(&self) -> Option<&TreeNode> {
        self.state
            .selected()
            .and_then(|id| find_in_forest(&self.forest, id))
    }

    // --- cursor ---

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_row(&self) -> Option<&FlatRow> {
        self.rows.get(self.cursor)
    }

    pub fn move_up(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    pub fn move_down(&mut self, n: usize) {
        if !self.rows.is_empty() {
            self.cursor = (self.cursor + n).min(self.rows.len() - 1);
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }

    pub fn toggle_at_cursor(&mut self) -> bool {
        match self.cursor_id() {
            Some(id) => self.toggle(&id),
            None => false,
        }
    }

    /// Expand the row under the cursor, or step into its first child if it
    /// is already expanded
    pub fn expand_at_cursor(&mut self) {
        let Some(row) = self.cursor_row() else {
            return;
        };
        if row.expanded {
            self.move_down(1);
        } else {
            let id = row.id.clone();
            if self.state.expand(&id) {
                self.relayout();
            }
        }
    }

    /// Collapse the row under the cursor, or jump to its parent row
    pub fn collapse_at_cursor(&mut self) {
        let Some(row) = self.cursor_row() else {
            return;
        };
        if row.expanded {
            let id = row.id.clone();
            if self.state.collapse(&id) {
                self.relayout();
                return;
            }
        }
        // Leaf, already collapsed, or pinned open by a filter: go to the parent
        if let Some(row) = self.cursor_row().filter(|r| r.depth > 0) {
            let depth = row.depth;
            if let Some(parent) = self.rows[..self.cursor]
                .iter()
                .rposition(|r| r.depth + 1 == depth)
            {
                self.cursor = parent;
            }
        }
    }

    pub fn select_at_cursor(&mut self) -> Option<&str> {
        let id = self.cursor_id()?;
        self.state.select(&id)
    }

    fn cursor_id(&self) -> Option<String> {
        self.cursor_row().map(|r| r.id.clone())
    }

    // --- derived views ---

    fn refilter(&mut self) {
        let active = !self.predicate.is_empty();
        self.filtered = active.then(|| filter(&self.forest, &self.predicate));
        self.state.set_filter_active(active);
        self.relayout();
    }

    fn relayout(&mut self) {
        let anchor = self.cursor_id();
        self.rows = flatten(self.visible_forest(), self.state.expansion());
        self.cursor = anchor
            .and_then(|id| self.rows.iter().position(|r| r.id == id))
            .unwrap_or_else(|| self.cursor.min(self.rows.len().saturating_sub(1)));
    }
}
