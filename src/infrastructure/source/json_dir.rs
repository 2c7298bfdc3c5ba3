//! JSON Directory Source
//!
//! Serves API payloads saved to disk. The directory mirrors the API paths:
//!
//! ```text
//! <root>/companies.json
//! <root>/companies/<id>/locations.json
//! <root>/companies/<id>/assets.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::domain::entities::{AssetRecord, Company, LocationRecord};
use crate::domain::ports::AssetSource;
use crate::error::{AssetreeError, AssetreeResult};

/// Asset source backed by a directory of JSON files
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    /// Open a data directory; fails if it does not exist
    pub fn open(root: impl Into<PathBuf>) -> AssetreeResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AssetreeError::DataDirNotFound { path: root });
        }
        Ok(Self { root })
    }

    fn company_dir(&self, company_id: &str) -> PathBuf {
        self.root.join("companies").join(company_id)
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> AssetreeResult<T> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| AssetreeError::Json {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Per-company collections are optional; a missing file is an empty list
    fn read_collection<T: DeserializeOwned>(path: &Path) -> AssetreeResult<Vec<T>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "collection file missing, treating as empty");
            return Ok(Vec::new());
        }
        Self::read_json(path)
    }
}

impl AssetSource for JsonDirSource {
    fn companies(&self) -> AssetreeResult<Vec<Company>> {
        Self::read_json(&self.root.join("companies.json"))
    }

    fn locations(&self, company_id: &str) -> AssetreeResult<Vec<LocationRecord>> {
        Self::read_collection(&self.company_dir(company_id).join("locations.json"))
    }

    fn assets(&self, company_id: &str) -> AssetreeResult<Vec<AssetRecord>> {
        Self::read_collection(&self.company_dir(company_id).join("assets.json"))
    }
}
