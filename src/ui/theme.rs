use crossterm::style::Color;

/// Design tokens for the assetree terminal UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and connector glyphs must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const POINTER: &str = "›";

    // Node kinds.
    pub const LOCATION: &str = "⌂";
    pub const ASSET: &str = "◇";
    pub const COMPONENT: &str = "◆";

    // Component markers.
    pub const ENERGY: &str = "⚡";
    pub const ALERT: &str = "●";
    pub const OPERATING: &str = "●";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const COMPANY: &str = "▣";
    pub const SEARCH: &str = "⌕";
}

pub mod icons_ascii {
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const POINTER: &str = ">";

    pub const LOCATION: &str = "[L]";
    pub const ASSET: &str = "[A]";
    pub const COMPONENT: &str = "[C]";

    pub const ENERGY: &str = "(E)";
    pub const ALERT: &str = "(!)";
    pub const OPERATING: &str = "(o)";

    pub const EXPAND: &str = "[-]";
    pub const COLLAPSE: &str = "[+]";

    pub const COMPANY: &str = "[CO]";
    pub const SEARCH: &str = "[?]";
}

/// Tree connector lines, three columns per depth level
pub mod connectors {
    pub const BRANCH: &str = "├─ ";
    pub const LAST: &str = "└─ ";
    pub const PIPE: &str = "│  ";
    pub const BLANK: &str = "   ";
    pub const RULE: &str = "─";
}

pub mod connectors_ascii {
    pub const BRANCH: &str = "|- ";
    pub const LAST: &str = "`- ";
    pub const PIPE: &str = "|  ";
    pub const BLANK: &str = "   ";
    pub const RULE: &str = "-";
}

/// The four connector glyphs for the given mode
#[derive(Debug, Clone, Copy)]
pub struct Connectors {
    pub branch: &'static str,
    pub last: &'static str,
    pub pipe: &'static str,
    pub blank: &'static str,
}

impl Connectors {
    pub fn for_mode(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                branch: connectors::BRANCH,
                last: connectors::LAST,
                pipe: connectors::PIPE,
                blank: connectors::BLANK,
            }
        } else {
            Self {
                branch: connectors_ascii::BRANCH,
                last: connectors_ascii::LAST,
                pipe: connectors_ascii::PIPE,
                blank: connectors_ascii::BLANK,
            }
        }
    }
}

/// Horizontal separator of `width` columns
pub fn rule(width: usize, supports_unicode: bool) -> String {
    let glyph = if supports_unicode {
        connectors::RULE
    } else {
        connectors_ascii::RULE
    };
    glyph.repeat(width)
}
