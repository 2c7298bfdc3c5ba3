//! Source Factory
//!
//! Creates the asset source with configuration and CLI overrides applied.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::config::Config;
use crate::domain::ports::AssetSource;
use crate::error::AssetreeResult;
use crate::infrastructure::JsonDirSource;

/// Open the data source; `data_override` (from `--data`) beats the config
pub fn create_source(
    config: &Config,
    data_override: Option<&Path>,
) -> AssetreeResult<Box<dyn AssetSource>> {
    let root = data_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.data_dir());
    tracing::debug!(root = %root.display(), "opening data directory");
    Ok(Box::new(JsonDirSource::open(root)?))
}
