//! Explorer view state and action handling.
//!
//! Wraps an `AssetExplorer` with what only the terminal needs: the search
//! input mode, the query being typed and the scroll window.

use std::time::Instant;

use assetree::{AssetExplorer, StatusFilter};

/// Input mode of the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Search,
}

/// Explorer action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    /// Flip expansion of the row under the cursor
    Toggle,
    /// Expand, or step into the first child
    Expand,
    /// Collapse, or jump to the parent
    Collapse,
    ExpandAll,
    CollapseAll,
    /// Toggle-select the row under the cursor (detail panel)
    Select,
    StatusFlag(StatusFilter),
    ClearFilters,
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    SearchCommit,
    SearchCancel,
    SwitchCompany,
    Quit,
}

/// What the loop should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    Continue,
    SwitchCompany,
    Quit,
}

pub struct ExplorerView {
    explorer: AssetExplorer,
    company: Option<String>,
    notice: Option<String>,
    mode: Mode,
    query: String,
    page_size: usize,
    scroll: usize,
}

impl ExplorerView {
    pub fn new(explorer: AssetExplorer, page_size: usize) -> Self {
        Self {
            explorer,
            company: None,
            notice: None,
            mode: Mode::Browse,
            query: String::new(),
            page_size: page_size.max(1),
            scroll: 0,
        }
    }

    /// Show a newly loaded company; the explorer resets filters and expansion
    pub fn show_company(
        &mut self,
        name: impl Into<String>,
        forest: Vec<assetree::TreeNode>,
        notice: Option<String>,
    ) {
        self.explorer.load(forest);
        self.company = Some(name.into());
        self.notice = notice;
        self.mode = Mode::Browse;
        self.query.clear();
        self.scroll = 0;
    }

    pub fn explorer(&self) -> &AssetExplorer {
        &self.explorer
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Message shown under the header (e.g. a failed fetch)
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn handle_action(&mut self, action: TreeAction, now: Instant) -> ViewEvent {
        let explorer = &mut self.explorer;
        match action {
            TreeAction::Up => explorer.move_up(1),
            TreeAction::Down => explorer.move_down(1),
            TreeAction::PageUp => explorer.move_up(self.page_size),
            TreeAction::PageDown => explorer.move_down(self.page_size),
            TreeAction::Home => explorer.move_to_start(),
            TreeAction::End => explorer.move_to_end(),
            TreeAction::Toggle => {
                explorer.toggle_at_cursor();
            }
            TreeAction::Expand => explorer.expand_at_cursor(),
            TreeAction::Collapse => explorer.collapse_at_cursor(),
            TreeAction::ExpandAll => explorer.expand_all(),
            TreeAction::CollapseAll => explorer.collapse_all(),
            TreeAction::Select => {
                explorer.select_at_cursor();
            }
            TreeAction::StatusFlag(flag) => explorer.toggle_status_filter(flag),
            TreeAction::ClearFilters => {
                self.query.clear();
                explorer.clear_filters();
            }
            TreeAction::StartSearch => {
                self.mode = Mode::Search;
                self.query = explorer.predicate().text.clone();
            }
            TreeAction::SearchInput(c) => {
                self.query.push(c);
                explorer.set_search(self.query.clone(), now);
            }
            TreeAction::SearchBackspace => {
                self.query.pop();
                explorer.set_search(self.query.clone(), now);
            }
            TreeAction::SearchCommit => {
                explorer.apply_search(self.query.clone());
                self.mode = Mode::Browse;
            }
            TreeAction::SearchCancel => {
                self.query.clear();
                explorer.apply_search(String::new());
                self.mode = Mode::Browse;
            }
            TreeAction::SwitchCompany => return ViewEvent::SwitchCompany,
            TreeAction::Quit => return ViewEvent::Quit,
        }
        ViewEvent::Continue
    }

    /// Apply debounced search text that has come due
    pub fn tick(&mut self, now: Instant) -> bool {
        self.explorer.tick(now)
    }

    /// Row range to draw in a window of `height` rows, keeping the cursor visible
    pub fn window(&mut self, height: usize) -> std::ops::Range<usize> {
        let len = self.explorer.rows().len();
        let height = height.max(1);
        let cursor = self.explorer.cursor();
        if cursor < self.scroll {
            self.scroll = cursor;
        } else if cursor >= self.scroll + height {
            self.scroll = cursor + 1 - height;
        }
        self.scroll = self.scroll.min(len.saturating_sub(height));
        self.scroll..(self.scroll + height).min(len)
    }
}
