//! In-memory asset source, for tests and embedding

use std::collections::HashMap;

use crate::domain::entities::{AssetRecord, Company, LocationRecord};
use crate::domain::ports::AssetSource;
use crate::error::{AssetreeError, AssetreeResult};

#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    companies: Vec<Company>,
    locations: HashMap<String, Vec<LocationRecord>>,
    assets: HashMap<String, Vec<AssetRecord>>,
    failing: Vec<String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a company with its records
    pub fn with_company(
        mut self,
        company: Company,
        locations: Vec<LocationRecord>,
        assets: Vec<AssetRecord>,
    ) -> Self {
        self.locations.insert(company.id.clone(), locations);
        self.assets.insert(company.id.clone(), assets);
        self.companies.push(company);
        self
    }

    /// Make every fetch for `company_id` fail
    pub fn with_failure(mut self, company_id: impl Into<String>) -> Self {
        self.failing.push(company_id.into());
        self
    }

    fn check(&self, company_id: &str) -> AssetreeResult<()> {
        if self.failing.iter().any(|id| id == company_id) {
            return Err(AssetreeError::Fetch {
                company_id: company_id.to_string(),
                message: "source unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl AssetSource for InMemorySource {
    fn companies(&self) -> AssetreeResult<Vec<Company>> {
        Ok(self.companies.clone())
    }

    fn locations(&self, company_id: &str) -> AssetreeResult<Vec<LocationRecord>> {
        self.check(company_id)?;
        Ok(self.locations.get(company_id).cloned().unwrap_or_default())
    }

    fn assets(&self, company_id: &str) -> AssetreeResult<Vec<AssetRecord>> {
        self.check(company_id)?;
        Ok(self.assets.get(company_id).cloned().unwrap_or_default())
    }
}
