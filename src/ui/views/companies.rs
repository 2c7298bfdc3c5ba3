use assetree::Company;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_companies(companies: &[Company], supports_color: bool, supports_unicode: bool) -> String {
    let mut out = CommandHeader::new(Icon::Company, "Companies").render(supports_color, supports_unicode);
    if companies.is_empty() {
        out.push_str(&ColoredText::dim("No companies found.").render(supports_color));
        out.push('\n');
        return out;
    }

    let id_width = companies.iter().map(|c| c.id.len()).max().unwrap_or(0);
    for company in companies {
        out.push_str(&format!(
            "  {}  {}\n",
            ColoredText::dim(format!("{:<width$}", company.id, width = id_width)).render(supports_color),
            company.name
        ));
    }
    out
}
