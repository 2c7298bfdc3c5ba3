use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
    reverse: bool,
}

impl ColoredText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
            reverse: false,
        }
    }

    fn colored(text: impl Into<String>, color: SemanticColor) -> Self {
        Self {
            color: Some(color),
            ..Self::plain(text)
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Error)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Warning)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Info)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Dim)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Highlight (cursor row)
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let mut styled = self.text.as_str().stylize();
        if let Some(color) = self.color {
            styled = styled.with(match color {
                SemanticColor::Success => theme::colors::SUCCESS,
                SemanticColor::Error => theme::colors::ERROR,
                SemanticColor::Warning => theme::colors::WARNING,
                SemanticColor::Info => theme::colors::INFO,
                SemanticColor::Dim => theme::colors::DIM,
            });
        }
        if self.bold {
            styled = styled.bold();
        }
        if self.reverse {
            styled = styled.reverse();
        }
        format!("{}", styled)
    }
}

/// Cut `text` to at most `max` terminal columns, marking the cut with `…`/`~`
pub fn truncate(text: &str, max: usize, supports_unicode: bool) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let marker = if supports_unicode { "…" } else { "~" };
    let budget = max.saturating_sub(marker.width());

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if max > 0 {
        out.push_str(marker);
    }
    out
}
