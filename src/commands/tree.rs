//! Tree command handler
//!
//! Prints a company's hierarchy after applying search, status filter and
//! expansion flags, either as connector-drawn text or as NDJSON rows.

use anyhow::Result;

use assetree::{AssetExplorer, StatusFilter};

use super::{load_company, Runtime};
use crate::ui::json::{emit, event_with};
use crate::ui::views::tree::render_tree;

pub struct TreeArgs {
    pub company: String,
    pub search: Option<String>,
    pub status: Option<StatusFilter>,
    pub expand_all: bool,
    pub expand: Vec<String>,
}

pub fn cmd_tree(rt: &Runtime, args: TreeArgs) -> Result<()> {
    let source = rt.source()?;
    let (company, forest) = load_company(&*source, &args.company)?;

    let mut explorer = AssetExplorer::new(rt.config.debounce());
    explorer.load(forest);

    // Expansion first: it is the manual state a filter temporarily overrides
    if args.expand_all {
        explorer.expand_all();
    }
    for id in &args.expand {
        if !explorer.expand(id) {
            tracing::warn!(id = %id, "cannot expand: unknown id or node without children");
        }
    }
    if let Some(text) = args.search {
        explorer.apply_search(text);
    }
    explorer.set_status_filter(args.status);

    if rt.ui.json {
        for row in explorer.rows() {
            emit(event_with("row", "tree", row)?)?;
        }
        emit(serde_json::json!({
            "event": "complete",
            "command": "tree",
            "company": company.id,
            "rows": explorer.rows().len(),
            "matches": explorer.match_count(),
            "total": explorer.total_nodes(),
        }))?;
        return Ok(());
    }

    print!("{}", render_tree(&company, &explorer, &rt.ui));
    Ok(())
}
