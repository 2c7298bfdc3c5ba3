//! Active company and race-safe loading of its hierarchy.
//!
//! Every company switch hands out a `FetchTicket`. A fetch result is only
//! accepted while its ticket is still the current one, so a slow response
//! for a company the user already left is dropped instead of replacing the
//! tree of the company now on screen.

use crate::domain::entities::{AssetRecord, Company, LocationRecord, TreeNode};
use crate::domain::ports::AssetSource;
use crate::domain::services::build;
use crate::error::{AssetreeError, AssetreeResult};

/// Identifies one fetch request for one company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    company_id: String,
    generation: u64,
}

impl FetchTicket {
    pub fn company_id(&self) -> &str {
        &self.company_id
    }
}

/// Raw collections returned by the API for one company
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPayload {
    pub locations: Vec<LocationRecord>,
    pub assets: Vec<AssetRecord>,
}

/// Result of handing a fetch result to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The result belongs to the active company; failures yield an empty forest
    Accepted(Vec<TreeNode>),
    /// The result belongs to a superseded request and was dropped
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct CompanySession {
    companies: Vec<Company>,
    active: Option<Company>,
    generation: u64,
    last_error: Option<String>,
}

impl CompanySession {
    pub fn new(companies: Vec<Company>) -> Self {
        Self {
            companies,
            ..Self::default()
        }
    }

    /// Load the company list from a source
    pub fn from_source(source: &dyn AssetSource) -> AssetreeResult<Self> {
        Ok(Self::new(source.companies()?))
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn active(&self) -> Option<&Company> {
        self.active.as_ref()
    }

    /// Error message of the last failed fetch for the active company
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Look a company up by id, or by case-insensitive name
    pub fn find_company(&self, key: &str) -> Option<&Company> {
        self.companies
            .iter()
            .find(|c| c.id == key)
            .or_else(|| self.companies.iter().find(|c| c.name.eq_ignore_ascii_case(key)))
    }

    /// Make `key` the active company and return the ticket for its fetch
    pub fn switch_company(&mut self, key: &str) -> AssetreeResult<FetchTicket> {
        let company = self
            .find_company(key)
            .cloned()
            .ok_or_else(|| AssetreeError::CompanyNotFound {
                key: key.to_string(),
            })?;

        self.generation += 1;
        self.last_error = None;
        tracing::info!(company = %company.name, generation = self.generation, "switching company");

        let ticket = FetchTicket {
            company_id: company.id.clone(),
            generation: self.generation,
        };
        self.active = Some(company);
        Ok(ticket)
    }

    /// Deselect the active company; pending fetches become stale
    pub fn clear(&mut self) {
        self.generation += 1;
        self.active = None;
        self.last_error = None;
    }

    /// Is `ticket` the latest request for the active company?
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
            && self
                .active
                .as_ref()
                .is_some_and(|c| c.id == ticket.company_id)
    }

    /// Accept or drop a fetch result
    pub fn accept(
        &mut self,
        ticket: &FetchTicket,
        result: AssetreeResult<CompanyPayload>,
    ) -> FetchOutcome {
        if !self.is_current(ticket) {
            tracing::warn!(
                company_id = %ticket.company_id,
                generation = ticket.generation,
                "dropping stale fetch result"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(payload) => {
                self.last_error = None;
                FetchOutcome::Accepted(build(&payload.locations, &payload.assets))
            }
            Err(err) => {
                tracing::warn!(company_id = %ticket.company_id, error = %err, "fetch failed");
                self.last_error = Some(err.to_string());
                FetchOutcome::Accepted(Vec::new())
            }
        }
    }

    /// Switch to `key` and load its hierarchy synchronously
    pub fn load(&mut self, source: &dyn AssetSource, key: &str) -> AssetreeResult<Vec<TreeNode>> {
        let ticket = self.switch_company(key)?;
        let result = fetch(source, ticket.company_id());
        match self.accept(&ticket, result) {
            FetchOutcome::Accepted(forest) => Ok(forest),
            FetchOutcome::Stale => Ok(Vec::new()),
        }
    }
}

/// Fetch both collections for a company
pub fn fetch(source: &dyn AssetSource, company_id: &str) -> AssetreeResult<CompanyPayload> {
    let locations = source.locations(company_id)?;
    let assets = source.assets(company_id)?;
    tracing::debug!(
        company_id,
        locations = locations.len(),
        assets = assets.len(),
        "fetched company records"
    );
    Ok(CompanyPayload { locations, assets })
}
