//! Rendering of flattened rows, status bar and help text to strings.

use unicode_width::UnicodeWidthStr;

use assetree::domain::entities::{FlatRow, NodeKind};
use assetree::{FilterPredicate, SensorType};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{truncate, ColoredText};
use crate::ui::theme::{icons, icons_ascii, Connectors};

/// How rows are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    pub unicode: bool,
    pub color: bool,
    /// Reserve a leading column for the cursor marker
    pub cursor_column: bool,
    /// Total columns available for a row
    pub max_width: Option<usize>,
}

impl RowStyle {
    pub fn plain(unicode: bool, color: bool) -> Self {
        Self {
            unicode,
            color,
            cursor_column: false,
            max_width: None,
        }
    }
}

/// Per-row highlight flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMarks {
    pub cursor: bool,
    pub selected: bool,
}

/// Connector prefix for `row`: one column group per non-root ancestor,
/// then the row's own branch
pub fn connector_prefix(row: &FlatRow, supports_unicode: bool) -> String {
    let glyphs = Connectors::for_mode(supports_unicode);
    let mut prefix = String::new();
    for &ancestor_is_last in row.ancestor_is_last_chain.iter().skip(1) {
        prefix.push_str(if ancestor_is_last {
            glyphs.blank
        } else {
            glyphs.pipe
        });
    }
    if row.depth > 0 {
        prefix.push_str(if row.is_last_child {
            glyphs.last
        } else {
            glyphs.branch
        });
    }
    prefix
}

fn toggle_icon(row: &FlatRow, supports_unicode: bool) -> String {
    let (expanded, collapsed) = if supports_unicode {
        (icons::EXPAND, icons::COLLAPSE)
    } else {
        (icons_ascii::EXPAND, icons_ascii::COLLAPSE)
    };
    if !row.has_children {
        return " ".repeat(expanded.width() + 1);
    }
    format!("{} ", if row.expanded { expanded } else { collapsed })
}

/// Energy bolt and status dot shown after a component's name
fn component_markers(row: &FlatRow, style: &RowStyle) -> String {
    let NodeKind::Component(info) = &row.kind else {
        return String::new();
    };
    let mut out = String::new();
    if info.sensor_type == SensorType::Energy {
        out.push(' ');
        out.push_str(&Icon::Energy.colored(style.color, style.unicode));
    }
    let status = if info.status.is_alert() {
        Icon::Alert
    } else {
        Icon::Operating
    };
    out.push(' ');
    out.push_str(&status.colored(style.color, style.unicode));
    out
}

/// Render a single row
pub fn render_row(row: &FlatRow, marks: RowMarks, style: &RowStyle) -> String {
    let cursor = if !style.cursor_column {
        String::new()
    } else if marks.cursor {
        format!("{} ", Icon::Pointer.render(style.unicode))
    } else {
        " ".repeat(Icon::Pointer.render(style.unicode).width() + 1)
    };

    let lead = format!(
        "{}{}{}",
        connector_prefix(row, style.unicode),
        toggle_icon(row, style.unicode),
        Icon::for_kind(&row.kind).render(style.unicode),
    );

    // name budget: leave room for the component markers
    let name = match style.max_width {
        Some(max) => truncate(
            &row.name,
            max.saturating_sub(cursor.width() + lead.width() + 6),
            style.unicode,
        ),
        None => row.name.clone(),
    };
    let mut name = ColoredText::plain(name);
    if marks.selected {
        name = name.bold();
    }
    if marks.cursor {
        name = name.reverse();
    }

    let lead = ColoredText::dim(lead).render(style.color);
    format!(
        "{}{} {}{}",
        cursor,
        lead,
        name.render(style.color),
        component_markers(row, style)
    )
}

/// Render every row, one per line
pub fn render_rows(rows: &[FlatRow], selected: Option<&str>, style: &RowStyle) -> String {
    rows.iter()
        .map(|row| {
            let marks = RowMarks {
                cursor: false,
                selected: selected == Some(row.id.as_str()),
            };
            render_row(row, marks, style) + "\n"
        })
        .collect()
}

/// One-line summary of the active filter and row counts
pub fn render_status_bar(
    predicate: &FilterPredicate,
    pending: Option<&str>,
    visible_rows: usize,
    matches: usize,
    total: usize,
) -> String {
    let mut parts = vec![format!("{} rows", visible_rows)];
    if predicate.is_empty() {
        parts.push(format!("{} nodes", total));
    } else {
        parts.push(format!("{}/{} nodes match", matches, total));
    }
    if !predicate.text.trim().is_empty() {
        parts.push(format!("search: \"{}\"", predicate.text.trim()));
    }
    if let Some(status) = predicate.status {
        parts.push(format!("filter: {}", status));
    }
    if pending.is_some() {
        parts.push("searching...".to_string());
    }
    parts.join("  |  ")
}

/// Keyboard shortcuts
pub fn render_help_bar(searching: bool) -> String {
    if searching {
        return String::from("Type to search    [Enter] Apply    [Esc] Clear search");
    }
    String::from(
        "[/] Search    [e] Energy    [a] Alert    [x] Clear    [+/-] Expand/Collapse all\n\
         [Enter] Details    [c] Company    [q] Quit    (j/k move, Space toggle, l/h open/close)",
    )
}
