//! Full-screen layout of the interactive explorer.

use assetree::domain::entities::ancestry;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::rule;
use crate::ui::views::detail::render_detail;
use crate::ui::widgets::asset_tree::{
    render_help_bar, render_row, render_status_bar, ExplorerView, Mode, RowMarks, RowStyle,
};

/// Lay out header, visible rows, detail panel and status/help bars
pub fn render_screen(view: &mut ExplorerView, ui: &UiContext, width: u16, height: u16) -> Vec<String> {
    let width = usize::from(width).max(20);
    let mut top = Vec::new();

    match view.company() {
        Some(name) => top.push(format!(
            "{} {}",
            Icon::Company.colored(ui.color, ui.unicode),
            ColoredText::info(name).bold().render(ui.color)
        )),
        None => top.push(ColoredText::warning("Select a company (press c)").render(ui.color)),
    }

    let search = match view.mode() {
        Mode::Search => format!("{}_", view.query()),
        Mode::Browse => view.explorer().predicate().text.clone(),
    };
    top.push(format!(
        "{} Search: {}",
        Icon::Search.colored(ui.color, ui.unicode),
        search
    ));
    if let Some(notice) = view.notice() {
        top.push(format!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning(notice).render(ui.color)
        ));
    }
    top.push(ColoredText::dim(rule(width, ui.unicode)).render(ui.color));

    let mut bottom = Vec::new();
    let explorer = view.explorer();
    if let Some(node) = explorer.selected_node() {
        let path = ancestry(explorer.forest(), &node.id).unwrap_or_default();
        let ancestors = &path[..path.len().saturating_sub(1)];
        bottom.push(ColoredText::dim(rule(width, ui.unicode)).render(ui.color));
        bottom.extend(render_detail(node, ancestors, ui.color, ui.unicode));
    }
    bottom.push(ColoredText::dim(rule(width, ui.unicode)).render(ui.color));
    bottom.push(render_status_bar(
        explorer.predicate(),
        explorer.pending_search(),
        explorer.rows().len(),
        explorer.match_count(),
        explorer.total_nodes(),
    ));
    bottom.extend(
        render_help_bar(view.mode() == Mode::Search)
            .lines()
            .map(|l| ColoredText::dim(l).render(ui.color)),
    );

    let tree_height = usize::from(height).saturating_sub(top.len() + bottom.len()).max(1);
    let window = view.window(tree_height);
    let explorer = view.explorer();
    let style = RowStyle {
        unicode: ui.unicode,
        color: ui.color,
        cursor_column: true,
        max_width: Some(width),
    };

    let mut middle = Vec::with_capacity(tree_height);
    if explorer.rows().is_empty() {
        let message = if view.company().is_none() {
            "No company selected."
        } else if explorer.forest().is_empty() {
            "No assets for this company."
        } else {
            "No nodes match the current filters."
        };
        middle.push(ColoredText::dim(message).render(ui.color));
    }
    let selected = explorer.state().selected();
    for (offset, row) in explorer.rows()[window.clone()].iter().enumerate() {
        let marks = RowMarks {
            cursor: window.start + offset == explorer.cursor(),
            selected: selected == Some(row.id.as_str()),
        };
        middle.push(render_row(row, marks, &style));
    }
    while middle.len() < tree_height {
        middle.push(String::new());
    }

    top.into_iter().chain(middle).chain(bottom).collect()
}
