//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetreeError, AssetreeResult};

use super::env_validator::EnvVarValidator;
use super::types::{ColorMode, Config};

/// Project config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "assetree.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AssetreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AssetreeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .rsplit('.')
                .next()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// Unknown keys and unreadable files are logged and skipped.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    tracing::warn!("{}", warning);
                }
                tracing::debug!(path = %path.display(), "loaded config");
                return with_env_overrides(config);
            }
            Err(err) => tracing::warn!(error = %err, "ignoring config file"),
        }
    }

    with_env_overrides(Config::default())
}

/// `<config dir>/assetree/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("assetree").join("config.toml"))
}

/// Apply environment variable overrides (ASSETREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `get_env`
pub fn with_env_overrides_from<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = get_env("ASSETREE_DATA_DIR").filter(|v| !v.trim().is_empty()) {
        config.source.data_dir = Some(PathBuf::from(dir));
    }

    if let Some(raw) = get_env("ASSETREE_DEBOUNCE_MS") {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.search.debounce_ms = ms,
            Err(_) => tracing::warn!(
                value = %raw,
                "invalid ASSETREE_DEBOUNCE_MS, expected milliseconds"
            ),
        }
    }

    if let Some(raw) = get_env("ASSETREE_COLOR") {
        let validator = EnvVarValidator::new("ASSETREE_COLOR", ColorMode::VALUES);
        config.output.color = validator.parse(&raw, ColorMode::parse, config.output.color);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "data_dir",
        "search",
        "debounce_ms",
        "output",
        "color",
        "unicode",
        "explorer",
        "default_company",
        "page_size",
    ];

    super::env_validator::closest(unknown, CANDIDATES).map(str::to_string)
}
