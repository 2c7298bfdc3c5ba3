use assetree::{AssetExplorer, Company};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::asset_tree::{render_rows, render_status_bar, RowStyle};

/// Static rendering of the explorer's current rows, for `assetree tree`
pub fn render_tree(company: &Company, explorer: &AssetExplorer, ui: &UiContext) -> String {
    let predicate = explorer.predicate();
    let mut header = CommandHeader::new(Icon::Company, company.name.as_str());
    if !predicate.text.trim().is_empty() {
        header.add("Search", predicate.text.trim());
    }
    if let Some(status) = predicate.status {
        header.add("Filter", status.as_str());
    }
    let mut out = header.render(ui.color, ui.unicode);

    if explorer.forest().is_empty() {
        out.push_str(&ColoredText::dim("No assets for this company.").render(ui.color));
        out.push('\n');
        return out;
    }
    if explorer.rows().is_empty() {
        out.push_str(&ColoredText::warning("No nodes match the current filters.").render(ui.color));
        out.push('\n');
        return out;
    }

    let style = RowStyle::plain(ui.unicode, ui.color);
    out.push_str(&render_rows(explorer.rows(), None, &style));
    out.push_str(
        &ColoredText::dim(render_status_bar(
            predicate,
            None,
            explorer.rows().len(),
            explorer.match_count(),
            explorer.total_nodes(),
        ))
        .render(ui.color),
    );
    out.push('\n');
    out
}
