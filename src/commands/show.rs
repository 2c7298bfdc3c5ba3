//! Show command handler: the detail panel for one node.

use anyhow::Result;
use serde::Serialize;

use assetree::domain::entities::{ancestry, NodeKind, TreeNode};
use assetree::AssetreeError;

use super::{load_company, Runtime};
use crate::ui::json::{emit, event_with};
use crate::ui::views::detail::render_detail;

/// Node without its subtree, for JSON output
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeDetail<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(flatten)]
    kind: &'a NodeKind,
    child_count: usize,
    path: Vec<&'a str>,
}

pub fn cmd_show(rt: &Runtime, company: &str, id: &str) -> Result<()> {
    let source = rt.source()?;
    let (_company, forest) = load_company(&*source, company)?;

    let path = ancestry(&forest, id).ok_or_else(|| AssetreeError::NodeNotFound {
        id: id.to_string(),
    })?;
    let (node, ancestors): (&TreeNode, &[&TreeNode]) = match path.split_last() {
        Some((node, ancestors)) => (*node, ancestors),
        None => return Err(AssetreeError::NodeNotFound { id: id.to_string() }.into()),
    };

    if rt.ui.json {
        let detail = NodeDetail {
            id: &node.id,
            name: &node.name,
            kind: &node.kind,
            child_count: node.children.len(),
            path: ancestors.iter().map(|n| n.id.as_str()).collect(),
        };
        emit(event_with("node", "show", &detail)?)?;
        return Ok(());
    }

    for line in render_detail(node, ancestors, rt.ui.color, rt.ui.unicode) {
        println!("{}", line);
    }
    Ok(())
}
