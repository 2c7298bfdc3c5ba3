//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::DEFAULT_DEBOUNCE_MS;
use crate::error::AssetreeResult;

use super::loader::{self, ConfigWarning};

/// Where asset data is read from
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceConfig {
    /// Directory holding `companies.json` and `companies/<id>/`
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Search box behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const VALUES: &'static [&'static str] = &["auto", "always", "never"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Interactive explorer defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Company opened by `browse` when none is given
    #[serde(default)]
    pub default_company: Option<String>,

    /// Rows moved by PageUp/PageDown
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            default_company: None,
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    10
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub explorer: ExplorerConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AssetreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AssetreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (ASSETREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Data directory, falling back to `./data`
    pub fn data_dir(&self) -> PathBuf {
        self.source
            .data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("data"))
    }

    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.search.debounce_ms)
    }
}
