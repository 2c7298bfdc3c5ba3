//! Filter predicate applied to the asset tree
//!
//! A predicate combines free-text search with an optional status flag.
//! The empty predicate (blank text, no flag) selects everything.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Status/sensor flag toggled from the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Only components with an energy sensor
    Energy,
    /// Only components reporting an alert
    Alert,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 2] = [StatusFilter::Energy, StatusFilter::Alert];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Energy => "energy",
            StatusFilter::Alert => "alert",
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "energy" => Ok(StatusFilter::Energy),
            "alert" | "critical" => Ok(StatusFilter::Alert),
            other => Err(format!(
                "unknown status filter '{}' (expected: energy, alert)",
                other
            )),
        }
    }
}

/// Search text plus optional status flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterPredicate {
    pub text: String,
    pub status: Option<StatusFilter>,
}

impl FilterPredicate {
    pub fn new(text: impl Into<String>, status: Option<StatusFilter>) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }

    /// Predicate matching names that contain `text`
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    /// Predicate matching only the given status flag
    pub fn status(status: StatusFilter) -> Self {
        Self::new(String::new(), Some(status))
    }

    /// True when the predicate selects every node
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.status.is_none()
    }

    /// Lowercased, trimmed search needle
    pub fn needle(&self) -> String {
        self.text.trim().to_lowercase()
    }
}
