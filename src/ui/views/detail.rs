//! Detail panel for a single node.

use assetree::domain::entities::{NodeKind, TreeNode};
use assetree::SensorType;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// Render the panel as lines. `path` lists the node's ancestors, root first.
pub fn render_detail(
    node: &TreeNode,
    path: &[&TreeNode],
    supports_color: bool,
    supports_unicode: bool,
) -> Vec<String> {
    let label = |text: &str| ColoredText::dim(format!("{:<10}", text)).render(supports_color);

    let mut lines = vec![format!(
        "{} {}",
        Icon::for_kind(&node.kind).colored(supports_color, supports_unicode),
        ColoredText::plain(node.name.as_str()).bold().render(supports_color)
    )];
    lines.push(format!("{}{}", label("Type"), node.kind.label()));
    lines.push(format!("{}{}", label("Id"), node.id));
    if !path.is_empty() {
        let sep = if supports_unicode { " › " } else { " > " };
        let names: Vec<&str> = path.iter().map(|n| n.name.as_str()).collect();
        lines.push(format!("{}{}", label("Path"), names.join(sep)));
    }

    match &node.kind {
        NodeKind::Component(info) => {
            let sensor = match info.sensor_type {
                SensorType::Energy => format!(
                    "{} {}",
                    info.sensor_type,
                    Icon::Energy.colored(supports_color, supports_unicode)
                ),
                SensorType::Vibration => info.sensor_type.to_string(),
            };
            let status_icon = if info.status.is_alert() {
                Icon::Alert
            } else {
                Icon::Operating
            };
            lines.push(format!("{}{}", label("Sensor"), sensor));
            let status = if info.status.is_alert() {
                ColoredText::error(info.status.as_str())
            } else {
                ColoredText::success(info.status.as_str())
            };
            lines.push(format!(
                "{}{} {}",
                label("Status"),
                status_icon.colored(supports_color, supports_unicode),
                status.render(supports_color)
            ));
            lines.push(format!("{}{}", label("Sensor id"), or_dash(&info.sensor_id)));
            lines.push(format!("{}{}", label("Gateway"), or_dash(&info.gateway_id)));
        }
        NodeKind::Location | NodeKind::Asset => {
            lines.push(format!("{}{}", label("Children"), node.children.len()));
            lines.push(format!("{}{}", label("Subtree"), node.node_count() - 1));
        }
    }
    lines
}
