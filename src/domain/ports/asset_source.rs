//! AssetSource port - abstraction over the remote asset API
//!
//! The domain never talks to the network or the file system; adapters in the
//! infrastructure layer implement this trait.

use crate::domain::entities::{AssetRecord, Company, LocationRecord};
use crate::error::AssetreeResult;

/// Read-only access to companies and their flat hierarchy records
pub trait AssetSource {
    /// `GET /companies`
    fn companies(&self) -> AssetreeResult<Vec<Company>>;

    /// `GET /companies/{id}/locations`
    fn locations(&self, company_id: &str) -> AssetreeResult<Vec<LocationRecord>>;

    /// `GET /companies/{id}/assets`
    fn assets(&self, company_id: &str) -> AssetreeResult<Vec<AssetRecord>>;
}
