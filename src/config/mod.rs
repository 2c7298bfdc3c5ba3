//! Configuration module for assetree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETREE_*)
//! 3. Project config (./assetree.toml)
//! 4. User config (<config dir>/assetree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{user_config_path, with_env_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, ExplorerConfig, OutputConfig, SearchConfig, SourceConfig};
