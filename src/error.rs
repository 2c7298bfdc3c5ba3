//! Error types for assetree
//!
//! Library code returns `AssetreeResult`; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for assetree operations
pub type AssetreeResult<T> = Result<T, AssetreeError>;

/// Main error type for assetree operations
#[derive(Error, Debug)]
pub enum AssetreeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A data file exists but does not hold the expected JSON shape
    #[error("invalid JSON in {file}: {message}")]
    Json { file: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Data directory not found
    #[error("data directory not found: {path}")]
    DataDirNotFound { path: PathBuf },

    /// No company matches the given id or name
    #[error("company '{key}' not found")]
    CompanyNotFound { key: String },

    /// No node with the given id exists in the loaded tree
    #[error("node '{id}' not found")]
    NodeNotFound { id: String },

    /// The data source failed while loading a company
    #[error("failed to load company '{company_id}': {message}")]
    Fetch { company_id: String, message: String },
}
