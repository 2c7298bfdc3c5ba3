use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Error message with optional location and fix hint
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    location: Option<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            fix: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(self.message.as_str())
                .bold()
                .render(supports_color)
        );
        if let Some(location) = &self.location {
            out.push_str(&format!(
                "  {}\n",
                ColoredText::dim(location.as_str()).render(supports_color)
            ));
        }
        if let Some(fix) = &self.fix {
            out.push_str(&format!("  FIX: {}\n", fix));
        }
        out
    }
}
